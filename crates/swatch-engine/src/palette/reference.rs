//! The canonical reference palette.
//!
//! 500 numbered colors followed by pure white (501) and pure black (502).
//! Hex strings are kept exactly as catalogued; output preserves their case.

use super::matcher::ReferenceEntry;

/// Id of the white entry.
pub const WHITE_ID: u32 = 501;

/// Id of the black entry.
pub const BLACK_ID: u32 = 502;

/// `(id, hex)` rows of the canonical library, in catalogue order.
#[rustfmt::skip]
pub const CANONICAL_LIBRARY: &[(u32, &str)] = &[
    (1, "#060739"), (2, "#080b05"), (3, "#082512"), (4, "#083008"), (5, "#0f0a1a"),
    (6, "#122727"), (7, "#122737"), (8, "#124008"), (9, "#130827"), (10, "#136747"),
    (11, "#150a57"), (12, "#156714"), (13, "#162a6a"), (14, "#17048b"), (15, "#182959"),
    (16, "#183959"), (17, "#184929"), (18, "#184939"), (19, "#184949"), (20, "#184959"),
    (21, "#184979"), (22, "#186929"), (23, "#187979"), (24, "#199383"), (25, "#1a8c0f"),
    (26, "#1c0779"), (27, "#1c5727"), (28, "#1c5777"), (29, "#1c606f"), (30, "#1c7747"),
    (31, "#1c8738"), (32, "#1ca008"), (33, "#1e510b"), (34, "#1ec320"), (35, "#1f050b"),
    (36, "#1f2343"), (37, "#1f5999"), (38, "#1f8999"), (39, "#1fa92a"), (40, "#1fa979"),
    (41, "#206f5f"), (42, "#212878"), (43, "#212888"), (44, "#2229a8"), (45, "#224898"),
    (46, "#2248c8"), (47, "#2258b8"), (48, "#226898"), (49, "#228848"), (50, "#229898"),
    (51, "#230fd3"), (52, "#2312b5"), (53, "#242715"), (54, "#250b3a"), (55, "#2612c5"),
    (56, "#2612e5"), (57, "#262897"), (58, "#2640b0"), (59, "#26841e"), (60, "#268e6e"),
    (61, "#26d012"), (62, "#270849"), (63, "#273aca"), (64, "#279a3a"), (65, "#27e626"),
    (66, "#2808a1"), (67, "#28750a"), (68, "#2879b9"), (69, "#28b949"), (70, "#2956c6"),
    (71, "#2979d9"), (72, "#29c999"), (73, "#29e979"), (74, "#2a096d"), (75, "#2aa0c0"),
    (76, "#2b07f0"), (77, "#2b42a2"), (78, "#2b4484"), (79, "#2b6464"), (80, "#2b68e8"),
    (81, "#2b7484"), (82, "#2b7898"), (83, "#2b88b8"), (84, "#2b9464"), (85, "#2ba858"),
    (86, "#2ba868"), (87, "#2bb218"), (88, "#2bb494"), (89, "#2bb858"), (90, "#2bb8c8"),
    (91, "#2bb8e8"), (92, "#2bc878"), (93, "#2bc8e8"), (94, "#2be181"), (95, "#2be868"),
    (96, "#2ceb57"), (97, "#2d360e"), (98, "#2f68b7"), (99, "#2fa0af"), (100, "#309aea"),
    (101, "#30aaea"), (102, "#30c748"), (103, "#30eaca"), (104, "#30f012"), (105, "#31a432"),
    (106, "#31b9a9"), (107, "#3279e9"), (108, "#32b9b9"), (109, "#32e9d9"), (110, "#33090a"),
    (111, "#33235f"), (112, "#342014"), (113, "#3525b5"), (114, "#3538e8"), (115, "#3558e8"),
    (116, "#35670b"), (117, "#35d8e8"), (118, "#35e898"), (119, "#35e8a8"), (120, "#35e8b8"),
    (121, "#35e8e8"), (122, "#3641e0"), (123, "#36cb8b"), (124, "#36d363"), (125, "#383847"),
    (126, "#3990ef"), (127, "#39a0cf"), (128, "#39d0cf"), (129, "#3c1c2b"), (130, "#3c2beb"),
    (131, "#3c85d5"), (132, "#3cd545"), (133, "#3d0d3a"), (134, "#400926"), (135, "#403d3d"),
    (136, "#404936"), (137, "#406f4f"), (138, "#4094d4"), (139, "#41d3c3"), (140, "#41d4b4"),
    (141, "#42e540"), (142, "#434272"), (143, "#440f91"), (144, "#469b10"), (145, "#484d0c"),
    (146, "#486857"), (147, "#4a1163"), (148, "#4b7535"), (149, "#4c2f0b"), (150, "#4c3f23"),
    (151, "#4d0c0b"), (152, "#4d5969"), (153, "#4d6611"), (154, "#4e8785"), (155, "#502d4d"),
    (156, "#504767"), (157, "#506282"), (158, "#507d4a"), (159, "#508f40"), (160, "#509f8f"),
    (161, "#50c720"), (162, "#52622d"), (163, "#534292"), (164, "#5366d6"), (165, "#540d4f"),
    (166, "#550b20"), (167, "#55bf8b"), (168, "#5749c9"), (169, "#586565"), (170, "#596faf"),
    (171, "#596fcf"), (172, "#5a053a"), (173, "#5b6d9d"), (174, "#5c8116"), (175, "#5d0fea"),
    (176, "#5d250e"), (177, "#5d3d4d"), (178, "#5d50af"), (179, "#5d9979"), (180, "#5e1b8c"),
    (181, "#5e9d2a"), (182, "#600f74"), (183, "#6012c5"), (184, "#601cbb"), (185, "#60305f"),
    (186, "#603292"), (187, "#6035b2"), (188, "#603827"), (189, "#603d7d"), (190, "#604912"),
    (191, "#605797"), (192, "#605f42"), (193, "#608f9f"), (194, "#60a7a7"), (195, "#60b318"),
    (196, "#60dc19"), (197, "#620fd3"), (198, "#623234"), (199, "#62e264"), (200, "#6312a4"),
    (201, "#63b538"), (202, "#641537"), (203, "#649210"), (204, "#64d773"), (205, "#65a272"),
    (206, "#65a4c4"), (207, "#660c0c"), (208, "#67c979"), (209, "#6867e7"), (210, "#68b7e7"),
    (211, "#69b9c6"), (212, "#6a7686"), (213, "#6bbf57"), (214, "#6c3f09"), (215, "#6c5f8f"),
    (216, "#6c6111"), (217, "#6c8fc1"), (218, "#6cad6d"), (219, "#6cc31b"), (220, "#6cc6e6"),
    (221, "#6d79c9"), (222, "#6da245"), (223, "#6e4cbc"), (224, "#701669"), (225, "#705a57"),
    (226, "#70780f"), (227, "#708262"), (228, "#708737"), (229, "#708787"), (230, "#70bf8f"),
    (231, "#70f01c"), (232, "#720f95"), (233, "#738f5d"), (234, "#7452e1"), (235, "#748faf"),
    (236, "#759381"), (237, "#75a60e"), (238, "#75f089"), (239, "#7838e7"), (240, "#78408f"),
    (241, "#7860af"), (242, "#78e7b7"), (243, "#791059"), (244, "#79be9e"), (245, "#7a0e85"),
    (246, "#7aea4e"), (247, "#7b2332"), (248, "#7bbd6d"), (249, "#7be1e1"), (250, "#7c204f"),
    (251, "#7c5683"), (252, "#7c7363"), (253, "#7cd51a"), (254, "#7d7f46"), (255, "#7f18eb"),
    (256, "#7f2e06"), (257, "#7fe89a"), (258, "#80425f"), (259, "#8044e4"), (260, "#805632"),
    (261, "#81110c"), (262, "#81d8e7"), (263, "#8237c2"), (264, "#825e71"), (265, "#82d94d"),
    (266, "#82e5c5"), (267, "#830b29"), (268, "#832923"), (269, "#8362c2"), (270, "#8386c6"),
    (271, "#844082"), (272, "#845a0f"), (273, "#84e1a1"), (274, "#856f45"), (275, "#857591"),
    (276, "#8579e9"), (277, "#8589e9"), (278, "#8599e9"), (279, "#85a9e9"), (280, "#85c3b6"),
    (281, "#865c4c"), (282, "#86e5d5"), (283, "#8711c8"), (284, "#883897"), (285, "#884124"),
    (286, "#8a16b1"), (287, "#8a1744"), (288, "#8b9d3c"), (289, "#8be96d"), (290, "#8cb13b"),
    (291, "#8cc51c"), (292, "#8d6f11"), (293, "#8d9f62"), (294, "#8dca68"), (295, "#8e167b"),
    (296, "#9060df"), (297, "#906dab"), (298, "#90afad"), (299, "#90b2c2"), (300, "#90c740"),
    (301, "#91910e"), (302, "#922d9f"), (303, "#92454a"), (304, "#924d0e"), (305, "#928a35"),
    (306, "#928fbd"), (307, "#92b25d"), (308, "#92ea17"), (309, "#934c7c"), (310, "#936363"),
    (311, "#93d6a6"), (312, "#947f0f"), (313, "#9720e5"), (314, "#98918d"), (315, "#98a919"),
    (316, "#98b8e7"), (317, "#997f42"), (318, "#9b347f"), (319, "#9b9bab"), (320, "#9ccceb"),
    (321, "#9d1a64"), (322, "#9d38e2"), (323, "#9d5dcd"), (324, "#9ee840"), (325, "#a00ea6"),
    (326, "#a05669"), (327, "#a05946"), (328, "#a08f6f"), (329, "#a0d519"), (330, "#a0e780"),
    (331, "#a10e09"), (332, "#a11320"), (333, "#a13004"), (334, "#a252b2"), (335, "#a252e4"),
    (336, "#a28275"), (337, "#a3bf22"), (338, "#a481d1"), (339, "#a4b395"), (340, "#a4bf8f"),
    (341, "#a4d494"), (342, "#a543c1"), (343, "#a610ed"), (344, "#a90e59"), (345, "#aa15bf"),
    (346, "#aa19d3"), (347, "#aa423f"), (348, "#aaea17"), (349, "#ab5024"), (350, "#ac1b8d"),
    (351, "#ac1c45"), (352, "#ac22a1"), (353, "#ac7317"), (354, "#ae3e65"), (355, "#ae753e"),
    (356, "#ae7e91"), (357, "#afaf17"), (358, "#b02036"), (359, "#b0609d"), (360, "#b0af3d"),
    (361, "#b0bd7b"), (362, "#b0bedc"), (363, "#b0df8f"), (364, "#b0e760"), (365, "#b1137a"),
    (366, "#b1a16e"), (367, "#b1aa53"), (368, "#b26217"), (369, "#b2785d"), (370, "#b28d3a"),
    (371, "#b29dbb"), (372, "#b2a0e3"), (373, "#b381b6"), (374, "#b3e1c3"), (375, "#b3edb8"),
    (376, "#b440df"), (377, "#b462b1"), (378, "#b482e1"), (379, "#b4ece7"), (380, "#b7cbb9"),
    (381, "#b83e27"), (382, "#b8d8e7"), (383, "#b9d6d6"), (384, "#ba9b28"), (385, "#baea17"),
    (386, "#bbcf1d"), (387, "#bc4c10"), (388, "#bc69e9"), (389, "#bc6c8c"), (390, "#bc79e9"),
    (391, "#bca918"), (392, "#bce16e"), (393, "#bce383"), (394, "#be2003"), (395, "#be5187"),
    (396, "#c01e5f"), (397, "#c06d6b"), (398, "#c0908d"), (399, "#c0ad9b"), (400, "#c0afdf"),
    (401, "#c0bdbd"), (402, "#c0c962"), (403, "#c0cd4b"), (404, "#c113ea"), (405, "#c1890e"),
    (406, "#c24cad"), (407, "#c25063"), (408, "#c26d4a"), (409, "#c432bf"), (410, "#c6e948"),
    (411, "#c8154e"), (412, "#c823de"), (413, "#c9181e"), (414, "#c91f93"), (415, "#ca1934"),
    (416, "#cb1776"), (417, "#cb448f"), (418, "#cb7017"), (419, "#cc19a9"), (420, "#ccb9c9"),
    (421, "#cccc23"), (422, "#cd59e9"), (423, "#ce9b60"), (424, "#cee71e"), (425, "#d0604d"),
    (426, "#d0e9b6"), (427, "#d217c9"), (428, "#d2423b"), (429, "#d2983d"), (430, "#d371d7"),
    (431, "#d494b4"), (432, "#d5a185"), (433, "#d66318"), (434, "#d6e292"), (435, "#d74455"),
    (436, "#d81611"), (437, "#d94e1e"), (438, "#d9a4e6"), (439, "#dbcd9b"), (440, "#dcb92b"),
    (441, "#de80ba"), (442, "#de8ee1"), (443, "#deebd7"), (444, "#e0214f"), (445, "#e050c2"),
    (446, "#e0b35c"), (447, "#e0bc83"), (448, "#e0d7bf"), (449, "#e0e780"), (450, "#e12171"),
    (451, "#e14871"), (452, "#e1718c"), (453, "#e18573"), (454, "#e1c0e3"), (455, "#e242a9"),
    (456, "#e28054"), (457, "#e290a1"), (458, "#e2ab3a"), (459, "#e2cd1e"), (460, "#e2e3a7"),
    (461, "#e38e47"), (462, "#e3a1d1"), (463, "#e3b3ba"), (464, "#e3ce55"), (465, "#e3ce77"),
    (466, "#e3d6e6"), (467, "#e442e7"), (468, "#e4448b"), (469, "#e4c1a7"), (470, "#e5a513"),
    (471, "#e5e85c"), (472, "#e619f0"), (473, "#e67c10"), (474, "#e6911f"), (475, "#e69c93"),
    (476, "#e69f6f"), (477, "#e7696e"), (478, "#e769be"), (479, "#e81f9a"), (480, "#e820af"),
    (481, "#e8610c"), (482, "#e870e7"), (483, "#e8bc13"), (484, "#e8f012"), (485, "#e91849"),
    (486, "#e91987"), (487, "#e93e29"), (488, "#e9dcdc"), (489, "#e9e323"), (490, "#ea1ce1"),
    (491, "#ea4345"), (492, "#ea440b"), (493, "#ea50d9"), (494, "#ea6a4a"), (495, "#ea6a9f"),
    (496, "#eb1736"), (497, "#eb1766"), (498, "#eb17c6"), (499, "#ec1a0e"), (500, "#ec7834"),
    (501, "#FFFFFF"), (502, "#000000"),
];

/// The canonical library as owned entries.
pub fn canonical_library() -> Vec<ReferenceEntry> {
    CANONICAL_LIBRARY
        .iter()
        .map(|&(id, hex)| ReferenceEntry::new(id, hex))
        .collect()
}
