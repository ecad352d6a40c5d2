use std::ops::Not;

use super::codec::Mode;
use super::mask::MaskPattern;

// Color
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Color {
    Dark,
    Light,
}

impl Not for Color {
    type Output = Self;
    fn not(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
pub enum ECLevel {
    L = 0,
    M = 1,
    Q = 2,
    H = 3,
}

impl ECLevel {
    // 2-bit value stored in the format information field
    pub(crate) fn format_bits(self) -> u32 {
        match self {
            Self::L => 1,
            Self::M => 0,
            Self::Q => 3,
            Self::H => 2,
        }
    }
}

// Version
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
pub struct Version(u8);

impl Version {
    pub const MIN: Version = Version(1);

    pub const MAX: Version = Version(40);

    pub const fn new(v: u8) -> Self {
        assert!(1 <= v && v <= 40, "Version out of range");
        Self(v)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn width(self) -> usize {
        self.0 as usize * 4 + 17
    }

    // Modules left after subtracting all function patterns
    pub(crate) const fn raw_data_modules(self) -> usize {
        let v = self.0 as usize;
        let mut result = (16 * v + 128) * v + 64;
        if v >= 2 {
            let numalign = v / 7 + 2;
            result -= (25 * numalign - 10) * numalign - 55;
            if v >= 7 {
                result -= 36;
            }
        }
        result
    }

    pub fn total_codewords(self) -> usize {
        self.raw_data_modules() >> 3
    }

    pub(crate) fn remainder_bits(self) -> usize {
        self.raw_data_modules() & 7
    }

    pub fn ecc_per_block(self, ecl: ECLevel) -> usize {
        ECC_CODEWORDS_PER_BLOCK[ecl as usize][self.0 as usize] as usize
    }

    pub fn block_count(self, ecl: ECLevel) -> usize {
        NUM_EC_BLOCKS[ecl as usize][self.0 as usize] as usize
    }

    // (group 1 data size, group 1 count, group 2 data size, group 2 count);
    // group 2 blocks carry one extra codeword
    pub fn data_codewords_per_block(self, ecl: ECLevel) -> (usize, usize, usize, usize) {
        let total = self.total_codewords();
        let count = self.block_count(ecl);
        let ecc = self.ecc_per_block(ecl);
        let g2_count = total % count;
        let g1_count = count - g2_count;
        let g1_size = total / count - ecc;
        let g2_size = if g2_count > 0 { g1_size + 1 } else { 0 };
        (g1_size, g1_count, g2_size, g2_count)
    }

    pub fn data_bit_capacity(self, ecl: ECLevel) -> usize {
        (self.total_codewords() - self.ecc_per_block(ecl) * self.block_count(ecl)) << 3
    }

    pub fn char_cnt_bits(self, mode: Mode) -> usize {
        let tier = ((self.0 as usize) + 7) / 17;
        match mode {
            Mode::Numeric => [10, 12, 14][tier],
            Mode::Alphanumeric => [9, 11, 13][tier],
            Mode::Byte => [8, 16, 16][tier],
            Mode::Kanji => [8, 10, 12][tier],
            Mode::Eci => 0,
        }
    }

    pub(crate) fn alignment_pattern(self) -> &'static [i16] {
        ALIGNMENT_PATTERN_COORDS[self.0 as usize]
    }

    // 18-bit version information, BCH(18, 6) with generator 0x1f25
    pub(crate) fn info(self) -> u32 {
        let v = self.0 as u32;
        let mut rem = v;
        for _ in 0..12 {
            rem = (rem << 1) ^ ((rem >> 11) * 0x1f25);
        }
        (v << 12) | rem
    }
}

// Format information
//------------------------------------------------------------------------------

// 15-bit format information, BCH(15, 5) with generator 0x537, masked with 0x5412
pub(crate) fn generate_format_info(ecl: ECLevel, mask: MaskPattern) -> u32 {
    let data = (ecl.format_bits() << 3) | (*mask as u32);
    let mut rem = data;
    for _ in 0..10 {
        rem = (rem << 1) ^ ((rem >> 9) * 0x537);
    }
    ((data << 10) | rem) ^ 0x5412
}

#[cfg(test)]
mod metadata_tests {
    use test_case::test_case;

    use super::{generate_format_info, ECLevel, Version};
    use crate::common::codec::Mode;
    use crate::common::mask::MaskPattern;

    #[test]
    fn test_width() {
        assert_eq!(Version::new(1).width(), 21);
        assert_eq!(Version::new(7).width(), 45);
        assert_eq!(Version::new(40).width(), 177);
    }

    #[test]
    #[should_panic]
    fn test_version_out_of_range() {
        Version::new(41);
    }

    #[test]
    fn test_total_codewords() {
        assert_eq!(Version::new(1).total_codewords(), 26);
        assert_eq!(Version::new(5).total_codewords(), 134);
        assert_eq!(Version::new(40).total_codewords(), 3706);
    }

    #[test_case(1, 0)]
    #[test_case(2, 7)]
    #[test_case(6, 7)]
    #[test_case(7, 0)]
    #[test_case(14, 3)]
    #[test_case(21, 4)]
    #[test_case(28, 3)]
    #[test_case(35, 0)]
    #[test_case(40, 0)]
    fn test_remainder_bits(version: u8, exp: usize) {
        assert_eq!(Version::new(version).remainder_bits(), exp);
    }

    #[test]
    fn test_data_capacity() {
        assert_eq!(Version::new(1).data_bit_capacity(ECLevel::M) >> 3, 16);
        assert_eq!(Version::new(5).data_bit_capacity(ECLevel::Q) >> 3, 62);
        assert_eq!(Version::new(40).data_bit_capacity(ECLevel::L) >> 3, 2956);
    }

    // Block structure must add up to the data codewords for every version
    // and level
    #[test]
    fn test_block_structure_consistency() {
        for v in 1..=40 {
            let ver = Version::new(v);
            for ecl in [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H] {
                let (g1_size, g1_count, g2_size, g2_count) = ver.data_codewords_per_block(ecl);
                let data_codewords = ver.data_bit_capacity(ecl) >> 3;
                assert_eq!(
                    g1_size * g1_count + g2_size * g2_count,
                    data_codewords,
                    "Version {v} {ecl:?}"
                );
                let full = data_codewords + ver.ecc_per_block(ecl) * ver.block_count(ecl);
                assert_eq!(full, ver.total_codewords(), "Version {v} {ecl:?}");
            }
        }
    }

    #[test]
    fn test_char_cnt_bits() {
        let v1 = Version::new(1);
        let v10 = Version::new(10);
        let v27 = Version::new(27);
        assert_eq!(v1.char_cnt_bits(Mode::Numeric), 10);
        assert_eq!(v10.char_cnt_bits(Mode::Numeric), 12);
        assert_eq!(v27.char_cnt_bits(Mode::Numeric), 14);
        assert_eq!(v1.char_cnt_bits(Mode::Alphanumeric), 9);
        assert_eq!(v10.char_cnt_bits(Mode::Byte), 16);
        assert_eq!(v27.char_cnt_bits(Mode::Kanji), 12);
        assert_eq!(v1.char_cnt_bits(Mode::Eci), 0);
    }

    #[test]
    fn test_alignment_pattern_coords() {
        assert!(Version::new(1).alignment_pattern().is_empty());
        assert_eq!(Version::new(2).alignment_pattern(), &[6, 18]);
        assert_eq!(Version::new(7).alignment_pattern(), &[6, 22, 38]);
        assert_eq!(Version::new(40).alignment_pattern(), &[6, 30, 58, 86, 114, 142, 170]);
    }

    #[test]
    fn test_version_info() {
        assert_eq!(Version::new(7).info(), 0x07c94);
        assert_eq!(Version::new(21).info(), 0x15683);
    }

    #[test]
    fn test_format_info() {
        assert_eq!(generate_format_info(ECLevel::M, MaskPattern::new(0)), 0x5412);
        assert_eq!(generate_format_info(ECLevel::L, MaskPattern::new(0)), 0x77c4);
        assert_eq!(generate_format_info(ECLevel::Q, MaskPattern::new(3)), 0x3a06);
        assert_eq!(generate_format_info(ECLevel::H, MaskPattern::new(7)), 0x083b);
    }
}

// Global constants
//------------------------------------------------------------------------------

pub const MAX_QR_SIZE: usize = 177 * 177;

pub(crate) static FORMAT_INFO_BIT_LEN: usize = 15;

pub(crate) static VERSION_INFO_BIT_LEN: usize = 18;

// Format information placement, most significant bit first. The main copy
// hugs the top-left finder, the side copy is split between the other two.
pub(crate) static FORMAT_INFO_COORDS_MAIN: [(i16, i16); 15] = [
    (8, 0),
    (8, 1),
    (8, 2),
    (8, 3),
    (8, 4),
    (8, 5),
    (8, 7),
    (8, 8),
    (7, 8),
    (5, 8),
    (4, 8),
    (3, 8),
    (2, 8),
    (1, 8),
    (0, 8),
];

pub(crate) static FORMAT_INFO_COORDS_SIDE: [(i16, i16); 15] = [
    (-1, 8),
    (-2, 8),
    (-3, 8),
    (-4, 8),
    (-5, 8),
    (-6, 8),
    (-7, 8),
    (8, -8),
    (8, -7),
    (8, -6),
    (8, -5),
    (8, -4),
    (8, -3),
    (8, -2),
    (8, -1),
];

// Version information placement, most significant bit first
pub(crate) static VERSION_INFO_COORDS_TR: [(i16, i16); 18] = [
    (5, -9),
    (5, -10),
    (5, -11),
    (4, -9),
    (4, -10),
    (4, -11),
    (3, -9),
    (3, -10),
    (3, -11),
    (2, -9),
    (2, -10),
    (2, -11),
    (1, -9),
    (1, -10),
    (1, -11),
    (0, -9),
    (0, -10),
    (0, -11),
];

pub(crate) static VERSION_INFO_COORDS_BL: [(i16, i16); 18] = [
    (-9, 5),
    (-10, 5),
    (-11, 5),
    (-9, 4),
    (-10, 4),
    (-11, 4),
    (-9, 3),
    (-10, 3),
    (-11, 3),
    (-9, 2),
    (-10, 2),
    (-11, 2),
    (-9, 1),
    (-10, 1),
    (-11, 1),
    (-9, 0),
    (-10, 0),
    (-11, 0),
];

// Alignment pattern center coordinates per version
static ALIGNMENT_PATTERN_COORDS: [&[i16]; 41] = [
    &[],
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
    &[6, 30, 54],
    &[6, 32, 58],
    &[6, 34, 62],
    &[6, 26, 46, 66],
    &[6, 26, 48, 70],
    &[6, 26, 50, 74],
    &[6, 30, 54, 78],
    &[6, 30, 56, 82],
    &[6, 30, 58, 86],
    &[6, 34, 62, 90],
    &[6, 28, 50, 72, 94],
    &[6, 26, 50, 74, 98],
    &[6, 30, 54, 78, 102],
    &[6, 28, 54, 80, 106],
    &[6, 32, 58, 84, 110],
    &[6, 30, 58, 86, 114],
    &[6, 34, 62, 90, 118],
    &[6, 26, 50, 74, 98, 122],
    &[6, 30, 54, 78, 102, 126],
    &[6, 26, 52, 78, 104, 130],
    &[6, 30, 56, 82, 108, 134],
    &[6, 34, 60, 86, 112, 138],
    &[6, 30, 58, 86, 114, 142],
    &[6, 34, 62, 90, 118, 146],
    &[6, 30, 54, 78, 102, 126, 150],
    &[6, 24, 50, 76, 102, 128, 154],
    &[6, 28, 54, 80, 106, 132, 158],
    &[6, 32, 58, 84, 110, 136, 162],
    &[6, 26, 54, 82, 110, 138, 166],
    &[6, 30, 58, 86, 114, 142, 170],
];

// Error correction codewords per block, indexed by [ECLevel][version]
static ECC_CODEWORDS_PER_BLOCK: [[u8; 41]; 4] = [
    [
        0, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
    [
        0, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ],
    [
        0, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
    [
        0, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
];

// Number of error correction blocks, indexed by [ECLevel][version]
static NUM_EC_BLOCKS: [[u8; 41]; 4] = [
    [
        0, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ],
    [
        0, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ],
    [
        0, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ],
    [
        0, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ],
];
