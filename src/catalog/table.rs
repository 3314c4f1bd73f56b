//! Built-in GPU table, grouped by brand.
//!
//! Only names and scores live here. Brand comes from the group a row sits in
//! and the mobile flag is derived when the catalog is assembled.

use crate::models::{FormFactor, Scores};

/// Release date of the built-in table.
pub const DATA_UPDATED: &str = "2025-07-14";

/// One row of a brand group.
#[derive(Debug, Clone, Copy)]
pub struct TableEntry {
    pub name: &'static str,
    pub scores: Scores,
    /// Explicit form factor; `None` lets the name classifier decide
    pub form_factor: Option<FormFactor>,
}

const fn gpu(name: &'static str, time_spy: u32, time_spy_ex: u32, port_royal: u32, steel_nomad: u32) -> TableEntry {
    TableEntry {
        name,
        scores: Scores::new(time_spy, time_spy_ex, port_royal, steel_nomad),
        form_factor: None,
    }
}

pub const NVIDIA: &[TableEntry] = &[
    gpu("RTX 5090D", 48732, 25485, 36673, 14133),
    gpu("RTX 4090", 35856, 19481, 26093, 9230),
    gpu("RTX 4090D", 34561, 18207, 24046, 8572),
    gpu("RTX 5080", 32248, 16066, 22143, 8360),
    gpu("RTX 4080 Super", 28545, 14253, 18355, 6580),
    gpu("RTX 4080", 28178, 14041, 17911, 6545),
    gpu("RTX 5070TI", 27622, 13532, 19201, 6502),
    gpu("RTX 5090M", 25129, 12327, 17063, 6156),
    gpu("RTX 4070TI Super", 23956, 11765, 15385, 5542),
    gpu("RTX 5080M", 22791, 11060, 14853, 5207),
    gpu("RTX 4070TI", 22655, 10908, 14033, 5016),
    gpu("RTX 4090M", 22652, 11065, 14350, 5146),
    gpu("RTX 5070", 22357, 10723, 14105, 5024),
    gpu("RTX 3090TI", 21732, 11312, 14859, 5742),
    gpu("RTX 4070 Super", 21212, 10138, 13201, 4618),
    gpu("RTX 3090", 19928, 10286, 13639, 5141),
    gpu("RTX 3080TI", 19586, 10036, 13240, 5081),
    gpu("RTX 4080M", 19108, 9104, 11828, 4260),
    gpu("RTX 3080 12GB", 18640, 9412, 12269, 4785),
    gpu("RTX 5070TI M", 18087, 8720, 11613, 3846),
    gpu("RTX 4070", 17826, 8368, 11123, 3844),
    gpu("RTX 3080", 17680, 8893, 11583, 4429),
    gpu("RTX 5060TI", 15856, 7245, 10289, 3455),
    gpu("RTX 3070TI", 14806, 7403, 8863, 3475),
    gpu("RTX 5070M", 14698, 6875, 9313, 3070),
    gpu("RTX 2080TI", 14623, 7086, 9114, 3550),
    gpu("RTX 5060", 14104, 6573, 8873, 3266),
    gpu("RTX 3070", 13716, 6786, 8303, 3162),
    gpu("RTX 4060TI", 13395, 6287, 8166, 2900),
    gpu("RTX 3080TI M", 12898, 6164, 8077, 2861),
    gpu("RTX 5060M", 12568, 5831, 7543, 2646),
    gpu("RTX 4070M", 12503, 5698, 7366, 2700),
    gpu("RTX 5050", 9954, 4607, 5912, 2303),
    gpu("RTX 5050M", 10416, 0, 6193, 0),
    gpu("RTX 3060TI", 12230, 5939, 7187, 2664),
    gpu("RTX 3080M", 12006, 5545, 7203, 2644),
    gpu("RTX 2080 Super", 11633, 5389, 7005, 2761),
    gpu("RTX 3070TI M", 11343, 5506, 6848, 2572),
    gpu("RTX 2080", 11097, 5157, 6447, 2603),
    gpu("RTX 4060M", 10520, 4867, 5820, 2255),
    gpu("RTX 3070M", 10479, 4935, 6251, 2380),
    gpu("RTX 4060", 10474, 4947, 5999, 2289),
    gpu("RTX 2070 Super", 10183, 4772, 6038, 2419),
    gpu("GTX 1080TI", 9993, 4706, 2212, 2228),
    gpu("RTX 2070", 9120, 4319, 5189, 2104),
    gpu("RTX 2060 Super", 8778, 4142, 5071, 2015),
    gpu("RTX 3060", 8732, 4096, 5141, 1960),
    gpu("RTX 3060M", 8327, 3951, 4708, 1822),
    gpu("RTX 4050M", 8213, 3819, 4627, 1789),
    gpu("GTX 1080", 7597, 3441, 1639, 1626),
    gpu("RTX 2060", 7429, 3515, 4146, 1723),
    gpu("GTX 1070TI", 6849, 3149, 1506, 1468),
    gpu("GTX 1660TI", 6371, 2884, 1658, 1305),
    gpu("RTX 3050", 6184, 2825, 3531, 1327),
    gpu("GTX 1070", 6093, 2847, 1250, 1339),
    gpu("GTX 1660 Super", 6076, 2803, 1561, 1281),
    gpu("GTX 1660", 5453, 2466, 1400, 1064),
    gpu("GTX 1650 Super", 4701, 2071, 0, 1003),
    gpu("GTX 1060 6G", 4203, 1918, 817, 906),
    gpu("GTX 1060 5G", 3908, 1759, 0, 811),
    gpu("GTX 1060 3G", 3867, 1777, 0, 159),
    gpu("GTX 1650", 3551, 1595, 0, 332),
    gpu("GTX 1050TI", 2355, 1095, 0, 302),
    gpu("GTX 1630", 2100, 955, 0, 289),
    gpu("GTX 1050", 1729, 419, 0, 123),
    gpu("GT 1030", 1088, 171, 0, 32),
];

pub const AMD: &[TableEntry] = &[
    gpu("RX 7900XTX", 30379, 15222, 16434, 6885),
    gpu("RX 9070XT", 29529, 14342, 18072, 7010),
    gpu("RX 7900XT", 26536, 13038, 14099, 5626),
    gpu("RX 9070", 26277, 12634, 15620, 5972),
    gpu("RX 9070 GRE", 22748, 10636, 13726, 5274),
    gpu("RX 7900GRE", 22284, 10535, 12334, 4801),
    gpu("RX 6950XT", 21884, 10687, 10826, 4253),
    gpu("RX 6900XT", 20640, 10028, 10395, 4119),
    gpu("RX 7800XT", 20022, 9432, 10816, 4142),
    gpu("RX 6800XT", 19198, 9273, 9535, 3720),
    gpu("RX 7700XT", 17011, 7858, 9048, 3304),
    gpu("RX 9060XT 16GB", 16413, 7489, 9736, 3764),
    gpu("RX 6800", 15994, 7727, 7836, 3208),
    gpu("RX 9060XT 8GB", 15744, 7234, 9047, 3525),
    gpu("RX 6750XT", 13593, 6321, 6283, 2570),
    gpu("RX 6700XT", 12807, 5966, 5977, 2458),
    gpu("RX 6750GRE 12G", 12625, 5874, 6309, 2415),
    gpu("RX6750GRE 10G", 11194, 4984, 5439, 2035),
    gpu("RX 7600", 10984, 5228, 5651, 2290),
    gpu("RX 7650 GRE", 10775, 5075, 5837, 2294),
    gpu("RX 6650XT", 10026, 4572, 4658, 1874),
    gpu("RX 6600XT", 9689, 4417, 4514, 1817),
    gpu("RX 5700XT", 9422, 4396, 0, 2155),
    gpu("RX 5700", 8312, 3994, 0, 1876),
    gpu("RX 6600", 8093, 3716, 3757, 1504),
    gpu("RX 5600XT", 7633, 3561, 0, 1669),
    gpu("RX 6500XT", 4974, 2288, 369, 830),
    gpu("RX 580", 4353, 1976, 0, 1003),
    gpu("RX 580 2048SP", 3846, 1769, 0, 848),
    gpu("RX 6400", 3584, 1659, 268, 176),
];

pub const INTEL: &[TableEntry] = &[
    gpu("ARC B580", 14795, 7113, 7889, 3064),
    gpu("ARC B570", 12518, 5969, 6722, 2648),
    gpu("ARC A770", 12673, 6515, 7065, 2976),
    gpu("ARC A750", 12260, 6109, 6616, 2605),
    gpu("ARC A580", 10664, 5414, 5551, 2229),
    gpu("ARC A380", 4386, 2033, 1573, 906),
];
