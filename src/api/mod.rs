pub mod library;
pub mod matching;
pub mod sample;

pub use library::{
    handle_library, handle_reload, LibraryEntryDto, LibraryResponse, ReloadResponse,
    __path_handle_library, __path_handle_reload,
};
pub use matching::{handle_match, ColorMatchDto, MatchRequest, MatchResponse, __path_handle_match};
pub use sample::{
    handle_sample, SamplePointDto, SampleRequest, SampleResponse, SampleState,
    __path_handle_sample,
};
