use std::io;
use thiserror::Error;

/// Broad classification of a [`DecodeError`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
	/// Fewer bytes available than required
	TruncatedStream,
	/// Wrong chunk type, wrong order or a malformed terminator
	FormatViolation,
	/// An actor-graph tag outside the known set
	UnrecognizedChunk,
	/// A payload buffer could not be obtained
	AllocationFailure,
	/// An actor field was set with no actor open
	ProtocolViolation,
	/// Any other I/O failure, such as a missing file
	Io,
}

#[derive(Debug, Error)]
pub enum DecodeError {
	#[error("Payload of {0} bytes could not be allocated")]
	Allocation(u64),
	#[error("Face material list has {entries} entries but the mesh has {faces} faces")]
	FaceMaterialCount {
		faces: usize,
		entries: usize,
	},
	#[error("Not a resource file header: type {ty:#x}, {size} bytes")]
	FileHeader {
		ty: u32,
		size: u32,
	},
	#[error("Expected file type {expected:#x} but got {found:#x}")]
	FileType {
		expected: u32,
		found: u32,
	},
	#[error("I/O error")]
	IO {
		source: io::Error,
	},
	#[error("Zero-payload marker {ty:#x} carries {size} bytes")]
	MarkerPayload {
		ty: u32,
		size: u32,
	},
	#[error("Chunk {0:#x} requires an open actor")]
	NoOpenActor(u32),
	#[error("Expected terminating chunk but got type {ty:#x} ({size} bytes)")]
	Terminator {
		ty: u32,
		size: u32,
	},
	#[error("Stream ended before the record was complete")]
	Truncated,
	#[error("Expected chunk {expected:#x} but got type {found:#x} ({size} bytes)")]
	UnexpectedChunk {
		expected: u32,
		found: u32,
		size: u32,
	},
	#[error("Unknown/unsupported chunk type: {0:#x}")]
	UnrecognizedChunk(u32),
}

impl DecodeError {
	pub fn kind(&self) -> ErrorKind {
		match self {
			DecodeError::Truncated => ErrorKind::TruncatedStream,
			DecodeError::FaceMaterialCount { .. } |
			DecodeError::FileHeader { .. } |
			DecodeError::FileType { .. } |
			DecodeError::MarkerPayload { .. } |
			DecodeError::Terminator { .. } |
			DecodeError::UnexpectedChunk { .. } => ErrorKind::FormatViolation,
			DecodeError::UnrecognizedChunk(_) => ErrorKind::UnrecognizedChunk,
			DecodeError::Allocation(_) => ErrorKind::AllocationFailure,
			DecodeError::NoOpenActor(_) => ErrorKind::ProtocolViolation,
			DecodeError::IO { .. } => ErrorKind::Io,
		}
	}
}

impl From<io::Error> for DecodeError {
	fn from(source: io::Error) -> Self {
		match source.kind() {
			io::ErrorKind::UnexpectedEof => DecodeError::Truncated,
			_ => DecodeError::IO {
				source: source,
			},
		}
	}
}
