//! # qrforge
//!
//! A Rust library for generating QR Code Model 2 symbols with Reed-Solomon
//! error correction. Supports versions 1-40, error correction levels L/M/Q/H
//! and Numeric, Alphanumeric, Byte, Kanji and ECI segment modes.
//!
//! ## Features
//!
//! - **Automatic mode selection**: text is split into maximal same-class
//!   runs, with uniform text collapsing into a single tight segment
//! - **Capacity negotiation**: the smallest version that fits is chosen, and
//!   spare capacity is traded for a higher error correction level
//! - **Mask selection**: all eight mask patterns are scored with the
//!   standard four penalty rules and the cheapest one wins
//! - **Rendering**: finished symbols can be queried module by module or
//!   rendered to a grayscale image, block-character art or an SVG document
//!
//! ## Quick Start
//!
//! ```rust
//! use qrforge::{ECLevel, QrCode};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let qr = QrCode::encode_text("Hello, World!", ECLevel::M)?;
//!
//! let img = qr.to_image(4); // 4x scale factor
//! # let _ = img;
//! # Ok(())
//! # }
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use qrforge::{ECLevel, MaskPattern, QrBuilder, Version};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let qr = QrBuilder::new()
//!     .text("Hello, World!")
//!     .version_range(Version::new(2), Version::new(10))
//!     .ec_level(ECLevel::Q)
//!     .mask(MaskPattern::new(3))
//!     .boost_ecl(false)
//!     .build()?;
//!
//! assert_eq!(qr.version(), Version::new(2));
//! assert_eq!(*qr.mask(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! ### Prepared Segments
//!
//! Mixed payloads can be assembled segment by segment to control the
//! encoding exactly:
//!
//! ```rust
//! use qrforge::{ECLevel, QrCode, Segment, Version};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let segs = vec![
//!     Segment::make_alphanumeric("ORDER-")?,
//!     Segment::make_numeric("0042")?,
//! ];
//! let qr = QrCode::encode_segments(
//!     &segs,
//!     ECLevel::M,
//!     Version::MIN,
//!     Version::MAX,
//!     None,
//!     true,
//! )?;
//! assert_eq!(qr.size(), 21);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Correction Levels
//!
//! - **L (Low)**: ~7% recoverable codewords
//! - **M (Medium)**: ~15% recoverable codewords
//! - **Q (Quartile)**: ~25% recoverable codewords
//! - **H (High)**: ~30% recoverable codewords

pub mod builder;
pub(crate) mod common;
mod render;

pub use builder::{QrBuilder, QrCode};
pub use common::codec::{Mode, Segment};
pub use common::error::{QrError, QrResult};
pub use common::mask::MaskPattern;
pub use common::metadata::{ECLevel, Version};
