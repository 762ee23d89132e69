use core::fmt;
use serde::{Deserialize, Serialize};

/// Context markers used when reporting serialization failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SerKind {
    /// Fixed-width integer or enumerated tag.
    Integral,
    /// Fixed-size raw byte array.
    Bytes,
    /// Prime field element.
    FieldElement,
    /// Compressed elliptic curve point.
    CurvePoint,
    /// Length-prefixed list.
    List,
    /// Presence-flagged optional value.
    Optional,
    /// Evaluation storage of a commitment proof.
    EvalStorage,
    /// Whole byte stream handled by the top-level helpers.
    Stream,
}

impl fmt::Display for SerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerKind::Integral => write!(f, "integral"),
            SerKind::Bytes => write!(f, "bytes"),
            SerKind::FieldElement => write!(f, "field element"),
            SerKind::CurvePoint => write!(f, "curve point"),
            SerKind::List => write!(f, "list"),
            SerKind::Optional => write!(f, "optional"),
            SerKind::EvalStorage => write!(f, "eval storage"),
            SerKind::Stream => write!(f, "stream"),
        }
    }
}

/// Coarse outcome of a marshalling operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// The operation completed.
    Success,
    /// Input ended early.
    NotEnoughData,
    /// Input was structurally or semantically malformed.
    InvalidMsgData,
    /// Output buffer was too small.
    BufferOverflow,
    /// Input carried bytes past the decoded value.
    TrailingBytes,
}

impl<T> From<&SerResult<T>> for Status {
    fn from(result: &SerResult<T>) -> Self {
        match result {
            Ok(_) => Status::Success,
            Err(err) => err.status(),
        }
    }
}

/// Canonical serialization error surfaced while encoding or decoding data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SerError {
    /// Input ended before the expected number of bytes were read.
    NotEnoughData {
        /// Structure that failed to decode.
        kind: SerKind,
        /// Field that was being processed.
        field: &'static str,
        /// Bytes the field required.
        needed: usize,
        /// Bytes left in the input.
        remaining: usize,
    },
    /// Decoded bytes violate a structural or canonical-form rule.
    InvalidMsgData {
        /// Structure that failed to decode.
        kind: SerKind,
        /// Field that was being processed.
        field: &'static str,
    },
    /// Output buffer cannot hold the encoding.
    BufferOverflow {
        /// Structure that failed to encode.
        kind: SerKind,
        /// Field that was being processed.
        field: &'static str,
        /// Bytes the field required.
        needed: usize,
        /// Bytes left in the output buffer.
        available: usize,
    },
    /// Additional bytes remained after consuming the expected payload.
    TrailingBytes {
        /// Structure that was decoded.
        kind: SerKind,
        /// Position reached by the decoder.
        consumed: usize,
        /// Number of remaining bytes.
        remaining: usize,
    },
}

impl SerError {
    /// Creates a not-enough-data error helper.
    pub fn not_enough_data(
        kind: SerKind,
        field: &'static str,
        needed: usize,
        remaining: usize,
    ) -> Self {
        SerError::NotEnoughData {
            kind,
            field,
            needed,
            remaining,
        }
    }

    /// Creates an invalid-message error helper.
    pub fn invalid_msg_data(kind: SerKind, field: &'static str) -> Self {
        SerError::InvalidMsgData { kind, field }
    }

    /// Creates a buffer-overflow error helper.
    pub fn buffer_overflow(
        kind: SerKind,
        field: &'static str,
        needed: usize,
        available: usize,
    ) -> Self {
        SerError::BufferOverflow {
            kind,
            field,
            needed,
            available,
        }
    }

    /// Creates a trailing-bytes error helper.
    pub fn trailing_bytes(kind: SerKind, consumed: usize, remaining: usize) -> Self {
        SerError::TrailingBytes {
            kind,
            consumed,
            remaining,
        }
    }

    /// Returns the serialization context associated with the error.
    pub fn kind(&self) -> SerKind {
        match *self {
            SerError::NotEnoughData { kind, .. }
            | SerError::InvalidMsgData { kind, .. }
            | SerError::BufferOverflow { kind, .. }
            | SerError::TrailingBytes { kind, .. } => kind,
        }
    }

    /// Maps the error onto its coarse status.
    pub fn status(&self) -> Status {
        match self {
            SerError::NotEnoughData { .. } => Status::NotEnoughData,
            SerError::InvalidMsgData { .. } => Status::InvalidMsgData,
            SerError::BufferOverflow { .. } => Status::BufferOverflow,
            SerError::TrailingBytes { .. } => Status::TrailingBytes,
        }
    }
}

impl fmt::Display for SerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerError::NotEnoughData {
                kind,
                field,
                needed,
                remaining,
            } => write!(
                f,
                "{kind}: not enough data for `{field}` ({needed} bytes needed, {remaining} left)"
            ),
            SerError::InvalidMsgData { kind, field } => {
                write!(f, "{kind}: invalid data in `{field}`")
            }
            SerError::BufferOverflow {
                kind,
                field,
                needed,
                available,
            } => write!(
                f,
                "{kind}: buffer overflow writing `{field}` ({needed} bytes needed, {available} available)"
            ),
            SerError::TrailingBytes {
                kind,
                consumed,
                remaining,
            } => write!(
                f,
                "{kind}: {remaining} trailing bytes after {consumed} consumed"
            ),
        }
    }
}

impl std::error::Error for SerError {}

/// Convenient alias for serialization results.
pub type SerResult<T> = core::result::Result<T, SerError>;
