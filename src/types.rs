//! Value types shared by the parser, the shape handlers and the rasterizer.

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// A point in pixel space (x right, y down).
///
/// Single precision on purpose: vertex math rounds through `f32` exactly the
/// way the drawn output expects.
pub type Point = glam::Vec2;

/// Outcome of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl Status {
    /// Numeric status code: `0` on success, `-1` on failure.
    pub fn code(self) -> i32 {
        match self {
            Status::Success => 0,
            Status::Failure => -1,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Success => write!(f, "success"),
            Status::Failure => write!(f, "failure"),
        }
    }
}

/// A compressed image plus its MIME type
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl EncodedImage {
    pub fn png(bytes: Vec<u8>) -> Self {
        Self {
            mime_type: "image/png",
            bytes,
        }
    }

    /// Standard (padded) base64 of the image bytes.
    pub fn base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    /// Inline image source, e.g. `data:image/png;base64,iVBOR...`
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64())
    }
}

// Image payloads are large; print their size rather than their bytes.
impl fmt::Debug for EncodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedImage")
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// What the engine hands back for every request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderResult {
    pub status: Status,
    /// Usage or error text on failure, empty on success
    pub message: String,
    /// Present only on success
    pub image: Option<EncodedImage>,
}

impl RenderResult {
    pub fn success(image: EncodedImage) -> Self {
        Self {
            status: Status::Success,
            message: String::new(),
            image: Some(image),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: Status::Failure,
            message: message.into(),
            image: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}

/// Canvas dimensions in whole pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Size { width, height }
    }

    /// Canvas of `width` x `height`, or `None` when either side exceeds `limit`.
    pub fn within(width: u64, height: u64, limit: u32) -> Option<Self> {
        let limit = u64::from(limit);
        if width > limit || height > limit {
            return None;
        }
        Some(Size::new(u32::try_from(width).ok()?, u32::try_from(height).ok()?))
    }

    /// Pixel center, rounded down like the integer midpoint of a bitmap.
    pub fn center(self) -> Point {
        Point::new((self.width / 2) as f32, (self.height / 2) as f32)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
