//! Published score-to-benchmark equivalency tables.
//!
//! Each table is ascending: the entry is the minimum raw score that earns the
//! paired benchmark level. Conversion and option listing both read these slices.

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Band {
    pub min_raw: f64,
    pub level: u8,
}

const fn band(min_raw: f64, level: u8) -> Band {
    Band { min_raw, level }
}

// IELTS General Training
pub(crate) const IELTS_SPEAKING: &[Band] = &[
    band(4.0, 4),
    band(5.0, 5),
    band(5.5, 6),
    band(6.0, 7),
    band(6.5, 8),
    band(7.0, 9),
    band(7.5, 10),
];

pub(crate) const IELTS_READING: &[Band] = &[
    band(3.5, 4),
    band(4.0, 5),
    band(5.0, 6),
    band(6.0, 7),
    band(6.5, 8),
    band(7.0, 9),
    band(8.0, 10),
];

pub(crate) const IELTS_WRITING: &[Band] = &[
    band(4.0, 4),
    band(5.0, 5),
    band(5.5, 6),
    band(6.0, 7),
    band(6.5, 8),
    band(7.0, 9),
    band(7.5, 10),
];

pub(crate) const IELTS_LISTENING: &[Band] = &[
    band(4.5, 4),
    band(5.0, 5),
    band(5.5, 6),
    band(6.0, 7),
    band(7.5, 8),
    band(8.0, 9),
    band(8.5, 10),
];

// TEF Canada
pub(crate) const TEF_SPEAKING: &[Band] = &[
    band(181.0, 4),
    band(226.0, 5),
    band(271.0, 6),
    band(310.0, 7),
    band(349.0, 8),
    band(371.0, 9),
    band(393.0, 10),
];

pub(crate) const TEF_READING: &[Band] = &[
    band(121.0, 4),
    band(151.0, 5),
    band(181.0, 6),
    band(207.0, 7),
    band(233.0, 8),
    band(248.0, 9),
    band(263.0, 10),
];

pub(crate) const TEF_WRITING: &[Band] = TEF_SPEAKING;

pub(crate) const TEF_LISTENING: &[Band] = &[
    band(145.0, 4),
    band(181.0, 5),
    band(217.0, 6),
    band(249.0, 7),
    band(280.0, 8),
    band(298.0, 9),
    band(316.0, 10),
];

// CELPIP-General reports on the benchmark scale directly.
pub(crate) const CELPIP_ALIGNED: &[Band] = &[
    band(4.0, 4),
    band(5.0, 5),
    band(6.0, 6),
    band(7.0, 7),
    band(8.0, 8),
    band(9.0, 9),
    band(10.0, 10),
    band(11.0, 11),
    band(12.0, 12),
];

/// Highest band whose minimum the raw score reaches, if any.
pub(crate) fn level_for(table: &[Band], raw: f64) -> Option<u8> {
    table
        .iter()
        .rev()
        .find(|entry| raw >= entry.min_raw)
        .map(|entry| entry.level)
}
