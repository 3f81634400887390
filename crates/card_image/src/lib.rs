//! Profile Card Image
//!
//! Avatar intake and decoding.
//!
//! # Features
//!
//! - Read a host [`FileHandle`](card_core::FileHandle) into a base64 data URI
//! - Parse stored data URIs back into bytes
//! - Decode PNG, JPEG, GIF, WebP and BMP into a paint [`Bitmap`](card_paint::Bitmap)
//! - CSS-style object-fit math for placing the avatar
//!
//! # Example
//!
//! ```ignore
//! use card_image::{DecodedImage, FileHandleExt};
//!
//! let uri = handle.read_data_uri().await?;
//! let stored = uri.to_string();
//! let decoded = DecodedImage::from_data_uri(&stored)?;
//! ```

mod cache;
mod data_uri;
mod decode;
mod error;
mod fit;
pub mod intake;

pub use cache::AvatarCache;
pub use data_uri::DataUri;
pub use decode::DecodedImage;
pub use error::{ImageError, Result};
pub use fit::{calculate_fit_rects, ObjectFit, ObjectPosition};
pub use intake::{read_data_uri, FileHandleExt};
