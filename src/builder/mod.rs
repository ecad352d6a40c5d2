mod qr;

pub use qr::QrCode;

use std::ops::Deref;

use log::debug;

use crate::common::{
    codec::{encode_to_codewords, Segment},
    ec,
    error::QrResult,
    mask::{apply_best_mask, MaskPattern},
    metadata::{ECLevel, Version},
    BitStream,
};

// Encoding entry points
//------------------------------------------------------------------------------

impl QrCode {
    /// Encodes `text` with automatic mode selection, the full version range,
    /// automatic masking and error correction boosting.
    pub fn encode_text(text: &str, ecl: ECLevel) -> QrResult<QrCode> {
        let segs = Segment::make_segments(text);
        Self::encode_segments(&segs, ecl, Version::MIN, Version::MAX, None, true)
    }

    /// Encodes `data` as a single byte-mode segment with the full version
    /// range, automatic masking and error correction boosting.
    pub fn encode_binary(data: &[u8], ecl: ECLevel) -> QrResult<QrCode> {
        let segs = [Segment::make_bytes(data)];
        Self::encode_segments(&segs, ecl, Version::MIN, Version::MAX, None, true)
    }

    /// Encodes prepared segments. The smallest version in
    /// `min_version..=max_version` that fits is used, `mask` of `None`
    /// selects the lowest-penalty pattern, and `boost_ecl` raises the error
    /// correction level when the chosen version has slack.
    ///
    /// Fails with [`QrError::DataTooLong`](crate::QrError::DataTooLong) when
    /// no version in range can hold the segments.
    pub fn encode_segments(
        segs: &[Segment],
        ecl: ECLevel,
        min_version: Version,
        max_version: Version,
        mask: Option<MaskPattern>,
        boost_ecl: bool,
    ) -> QrResult<QrCode> {
        let (data, version, ecl) =
            encode_to_codewords(segs, ecl, min_version, max_version, boost_ecl)?;

        let total_codewords = version.total_codewords();
        let mut payload = BitStream::new(total_codewords << 3);

        let (data_blocks, ecc_blocks) = compute_ecc(data.data(), version, ecl);
        payload.extend(&interleave(&data_blocks));
        payload.extend(&interleave(&ecc_blocks));

        let mut qr = QrCode::new(version, ecl);
        qr.draw_all_function_patterns();
        qr.draw_encoding_region(&payload);

        let mask = match mask {
            Some(m) => {
                qr.apply_mask(m);
                m
            }
            None => apply_best_mask(&mut qr),
        };
        debug!(
            "Built QR symbol: version {}, ec level {ecl:?}, mask {}",
            version.value(),
            *mask
        );

        Ok(qr)
    }
}

// Error correction and interleaving
//------------------------------------------------------------------------------

fn compute_ecc(data: &[u8], version: Version, ecl: ECLevel) -> (Vec<&[u8]>, Vec<Vec<u8>>) {
    let data_blocks = blockify(data, version, ecl);

    let divisor = ec::compute_divisor(version.ecc_per_block(ecl));
    let ecc_blocks =
        data_blocks.iter().map(|b| ec::compute_remainder(b, &divisor)).collect::<Vec<_>>();

    (data_blocks, ecc_blocks)
}

// Group 1 blocks come first and are one codeword shorter than group 2 blocks
fn blockify(data: &[u8], version: Version, ecl: ECLevel) -> Vec<&[u8]> {
    let (g1_size, g1_count, g2_size, g2_count) = version.data_codewords_per_block(ecl);

    let total_g1_size = g1_size * g1_count;
    let total_size = total_g1_size + g2_size * g2_count;

    debug_assert!(
        total_size == data.len(),
        "Data length doesn't match total block size: Data {}, Blocks {total_size}",
        data.len(),
    );

    let mut data_blocks = Vec::with_capacity(g1_count + g2_count);
    data_blocks.extend(data[..total_g1_size].chunks(g1_size));
    if g2_size > 0 {
        data_blocks.extend(data[total_g1_size..].chunks(g2_size));
    }
    data_blocks
}

fn interleave<T: Copy, V: Deref<Target = [T]>>(blocks: &[V]) -> Vec<T> {
    let max_block_size = blocks.iter().map(|b| b.len()).max().expect("Blocks is empty");
    let total_size = blocks.iter().map(|b| b.len()).sum::<usize>();
    let mut res = Vec::with_capacity(total_size);
    for i in 0..max_block_size {
        for b in blocks {
            if i < b.len() {
                res.push(b[i]);
            }
        }
    }
    res
}

#[cfg(test)]
mod ecc_glue_tests {
    use super::{blockify, compute_ecc, interleave};
    use crate::common::metadata::{ECLevel, Version};

    #[test]
    fn test_add_ec_simple() {
        let msg = b" [\x0bx\xd1r\xdcMC@\xec\x11\xec\x11\xec\x11";
        let expected_ecc = [b"\xc4\x23\x27\x77\xeb\xd7\xe7\xe2\x5d\x17"];
        let (_, ecc) = compute_ecc(msg, Version::new(1), ECLevel::M);
        assert_eq!(&*ecc, expected_ecc);
    }

    #[test]
    fn test_add_ec_complex() {
        let msg = b"CUF\x86W&U\xc2w2\x06\x12\x06g&\xf6\xf6B\x07v\x86\xf2\x07&V\x16\xc6\xc7\x92\x06\
                    \xb6\xe6\xf7w2\x07v\x86W&R\x06\x86\x972\x07F\xf7vV\xc2\x06\x972\x10\xec\x11\xec\
                    \x11\xec\x11\xec";
        let expected_ec = [
            b"\xd5\xc7\x0b\x2d\x73\xf7\xf1\xdf\xe5\xf8\x9a\x75\x9a\x6f\x56\xa1\x6f\x27",
            b"\x57\xcc\x60\x3c\xca\xb6\x7c\x9d\xc8\x86\x1b\x81\xd1\x11\xa3\xa3\x78\x85",
            b"\x94\x74\xb1\xd4\x4c\x85\x4b\xf2\xee\x4c\xc3\xe6\xbd\x0a\x6c\xf0\xc0\x8d",
            b"\xeb\x9f\x05\xad\x18\x93\x3b\x21\x6a\x28\xff\xac\x52\x02\x83\x20\xb2\xec",
        ];
        let (_, ecc) = compute_ecc(msg, Version::new(5), ECLevel::Q);
        assert_eq!(&*ecc, &expected_ec[..]);
    }

    #[test]
    fn test_blockify_uneven_groups() {
        // 5-Q splits 62 data codewords into 2 blocks of 15 and 2 of 16
        let data = (0..62u8).collect::<Vec<_>>();
        let blocks = blockify(&data, Version::new(5), ECLevel::Q);
        assert_eq!(blocks.len(), 4);
        assert_eq!(blocks[0].len(), 15);
        assert_eq!(blocks[1].len(), 15);
        assert_eq!(blocks[2].len(), 16);
        assert_eq!(blocks[3].len(), 16);
        assert_eq!(blocks[2][0], 30);
    }

    #[test]
    fn test_interleave() {
        let blocks = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9, 0]];
        let interleaved = interleave(&blocks);
        let exp_interleaved = vec![1, 4, 7, 2, 5, 8, 3, 6, 9, 0];
        assert_eq!(interleaved, exp_interleaved);
    }
}

// Builder
//------------------------------------------------------------------------------

/// Chainable front to [`QrCode::encode_segments`] with the usual defaults.
///
/// ```rust
/// use qrforge::{ECLevel, QrBuilder};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let qr = QrBuilder::new().ec_level(ECLevel::Q).text("HELLO WORLD").build()?;
/// assert_eq!(qr.size(), 21);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct QrBuilder {
    segments: Vec<Segment>,
    ec_level: ECLevel,
    min_version: Version,
    max_version: Version,
    mask: Option<MaskPattern>,
    boost_ecl: bool,
}

impl Default for QrBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QrBuilder {
    pub fn new() -> Self {
        Self {
            segments: vec![],
            ec_level: ECLevel::M,
            min_version: Version::MIN,
            max_version: Version::MAX,
            mask: None,
            boost_ecl: true,
        }
    }

    pub fn text(mut self, text: &str) -> Self {
        self.segments = Segment::make_segments(text);
        self
    }

    pub fn binary(mut self, data: &[u8]) -> Self {
        self.segments = vec![Segment::make_bytes(data)];
        self
    }

    pub fn segments(mut self, segments: Vec<Segment>) -> Self {
        self.segments = segments;
        self
    }

    pub fn ec_level(mut self, ec_level: ECLevel) -> Self {
        self.ec_level = ec_level;
        self
    }

    pub fn version(mut self, version: Version) -> Self {
        self.min_version = version;
        self.max_version = version;
        self
    }

    pub fn version_range(mut self, min: Version, max: Version) -> Self {
        self.min_version = min;
        self.max_version = max;
        self
    }

    pub fn mask(mut self, mask: MaskPattern) -> Self {
        self.mask = Some(mask);
        self
    }

    pub fn boost_ecl(mut self, boost: bool) -> Self {
        self.boost_ecl = boost;
        self
    }

    pub fn build(self) -> QrResult<QrCode> {
        QrCode::encode_segments(
            &self.segments,
            self.ec_level,
            self.min_version,
            self.max_version,
            self.mask,
            self.boost_ecl,
        )
    }
}
