//! Chunk framing shared by every resource kind.
//!
//! Every record is a stream of chunks, each starting with a big endian `(type, size)` pair.
//! The reserved `(0, 0)` chunk terminates every compound record.

use byteorder::{
	BE,
	ReadBytesExt
};

use tracing::{
	trace,
	warn
};

use crate::{
	cfg::{
		ImportCfg,
		ImportFlag
	},
	error::DecodeError,
	io_ext::ReadBinExt
};

/// Size declared by the resource file header chunk
pub const FILE_HEADER_SIZE: u32 = 8;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ChunkType {
	Null = 0x00,
	PixelmapHeader = 0x03,
	MaterialDesc = 0x04,
	FileHeader = 0x12,
	MaterialList = 0x16,
	VertexList = 0x17,
	UvMapList = 0x18,
	FaceMatList = 0x1a,
	PixelmapRef = 0x1c,
	RenderTabRef = 0x1f,
	PixelmapData = 0x21,
	ActorName = 0x23,
	MeshFileRef = 0x24,
	Unknown25 = 0x25,
	MaterialRef = 0x26,
	Unknown2A = 0x2a,
	ActorTransform = 0x2b,
	FaceList = 0x35,
	FileName = 0x36,
}

impl ChunkType {
	pub fn from_u32(ty: u32) -> Option<ChunkType> {
		match ty {
			0x00 => Some(ChunkType::Null),
			0x03 => Some(ChunkType::PixelmapHeader),
			0x04 => Some(ChunkType::MaterialDesc),
			0x12 => Some(ChunkType::FileHeader),
			0x16 => Some(ChunkType::MaterialList),
			0x17 => Some(ChunkType::VertexList),
			0x18 => Some(ChunkType::UvMapList),
			0x1a => Some(ChunkType::FaceMatList),
			0x1c => Some(ChunkType::PixelmapRef),
			0x1f => Some(ChunkType::RenderTabRef),
			0x21 => Some(ChunkType::PixelmapData),
			0x23 => Some(ChunkType::ActorName),
			0x24 => Some(ChunkType::MeshFileRef),
			0x25 => Some(ChunkType::Unknown25),
			0x26 => Some(ChunkType::MaterialRef),
			0x2a => Some(ChunkType::Unknown2A),
			0x2b => Some(ChunkType::ActorTransform),
			0x35 => Some(ChunkType::FaceList),
			0x36 => Some(ChunkType::FileName),
			_ => None,
		}
	}
}

/// Resource kinds named by the file header subtype
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum FileType {
	Actor = 0x1,
	Pixelmap = 0x2,
	Material = 0x5,
	Mesh = 0xface,
}

impl FileType {
	pub fn from_u32(ty: u32) -> Option<FileType> {
		match ty {
			0x1 => Some(FileType::Actor),
			0x2 => Some(FileType::Pixelmap),
			0x5 => Some(FileType::Material),
			0xface => Some(FileType::Mesh),
			_ => None,
		}
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ChunkHeader {
	pub ty: u32,
	pub size: u32,
}

impl ChunkHeader {
	#[cfg(feature = "import")]
	pub fn read<R>(buf: &mut R) -> Result<ChunkHeader, DecodeError>
	where
		R: ReadBytesExt,
	{
		let ty = buf.read_u32::<BE>()?;
		let size = buf.read_u32::<BE>()?;
		trace!(ty, size, "chunk header");

		Ok(ChunkHeader {
			ty: ty,
			size: size,
		})
	}

	/// Reads a header that is either the terminator or a chunk of the given type
	#[cfg(feature = "import")]
	pub fn read_optional<R>(expected: ChunkType, buf: &mut R)
		-> Result<Option<ChunkHeader>, DecodeError>
	where
		R: ReadBytesExt,
	{
		let header = ChunkHeader::read(buf)?;
		if header.is_null() {
			return Ok(None);
		}

		header.expect(expected).map(Some)
	}

	/// Reads a header and requires it to be the terminator
	#[cfg(feature = "import")]
	pub fn read_terminator<R>(buf: &mut R) -> Result<(), DecodeError>
	where
		R: ReadBytesExt,
	{
		let header = ChunkHeader::read(buf)?;
		if header.is_null() {
			Ok(())
		} else {
			Err(DecodeError::Terminator {
				ty: header.ty,
				size: header.size,
			})
		}
	}

	pub fn is_null(&self) -> bool {
		self.ty == ChunkType::Null as u32 && self.size == 0
	}

	pub fn kind(&self) -> Option<ChunkType> {
		ChunkType::from_u32(self.ty)
	}

	pub fn expect(self, expected: ChunkType) -> Result<ChunkHeader, DecodeError> {
		if self.ty == expected as u32 {
			Ok(self)
		} else {
			Err(DecodeError::UnexpectedChunk {
				expected: expected as u32,
				found: self.ty,
				size: self.size,
			})
		}
	}
}

/// Chunk header followed by an entry count.
///
/// File name chunks only carry a 16-bit count, everything else a 32-bit one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ExtendedChunkHeader {
	pub ty: u32,
	pub size: u32,
	pub entries: u32,
}

impl ExtendedChunkHeader {
	#[cfg(feature = "import")]
	pub fn read<R>(buf: &mut R) -> Result<ExtendedChunkHeader, DecodeError>
	where
		R: ReadBytesExt,
	{
		let ty = buf.read_u32::<BE>()?;
		let mut size = buf.read_u32::<BE>()?;

		let entries = if ty == ChunkType::FileName as u32 {
			buf.read_u16::<BE>()? as u32
		} else {
			buf.read_u32::<BE>()?
		};

		// face material list sizes are stored 8 bytes short
		if ty == ChunkType::FaceMatList as u32 {
			size = size.wrapping_add(8);
		}
		trace!(ty, size, entries, "extended chunk header");

		Ok(ExtendedChunkHeader {
			ty: ty,
			size: size,
			entries: entries,
		})
	}

	pub fn expect(self, expected: ChunkType) -> Result<ExtendedChunkHeader, DecodeError> {
		if self.ty == expected as u32 {
			Ok(self)
		} else {
			Err(DecodeError::UnexpectedChunk {
				expected: expected as u32,
				found: self.ty,
				size: self.size,
			})
		}
	}
}

/// Header chunk opening every resource file
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FileHeader {
	pub file_type: u32,
	pub reserved: u32,
}

impl FileHeader {
	#[cfg(feature = "import")]
	pub fn read<R>(buf: &mut R) -> Result<FileHeader, DecodeError>
	where
		R: ReadBytesExt,
	{
		let header = ChunkHeader::read(buf)?;
		if header.ty != ChunkType::FileHeader as u32 || header.size != FILE_HEADER_SIZE {
			return Err(DecodeError::FileHeader {
				ty: header.ty,
				size: header.size,
			});
		}

		Ok(FileHeader {
			file_type: buf.read_u32::<BE>()?,
			reserved: buf.read_u32::<BE>()?,
		})
	}

	pub fn kind(&self) -> Option<FileType> {
		FileType::from_u32(self.file_type)
	}

	/// Compares the subtype against the resource kind a loader expects.
	///
	/// Mismatches are only fatal with [`ImportFlag::STRICT_FILE_TYPE`].
	pub fn check(&self, expected: FileType, cfg: &ImportCfg) -> Result<(), DecodeError> {
		if self.file_type == expected as u32 {
			return Ok(());
		}

		if cfg.flags.contains(ImportFlag::STRICT_FILE_TYPE) {
			return Err(DecodeError::FileType {
				expected: expected as u32,
				found: self.file_type,
			});
		}

		warn!("Expected file type {:#x} but got {:#x}", expected as u32, self.file_type);
		Ok(())
	}
}

/// Reads a resource name, canonicalized to uppercase
#[cfg(feature = "import")]
pub fn read_name<R>(buf: &mut R) -> Result<String, DecodeError>
where
	R: ReadBinExt,
{
	Ok(buf.read_cstr_upper()?)
}

#[cfg(all(test, feature = "import"))]
mod tests {
	use crate::ErrorKind;

	use super::*;

	#[test]
	fn test_chunk_header() {
		let mut data = &[0, 0, 0, 0x17, 0, 0, 0, 0x0c][..];
		let header = ChunkHeader::read(&mut data).unwrap();
		assert_eq!(ChunkHeader { ty: 0x17, size: 12 }, header);
		assert_eq!(Some(ChunkType::VertexList), header.kind());
		assert!(!header.is_null());
	}

	#[test]
	fn test_extended_header() {
		let mut data = &[0, 0, 0, 0x17, 0, 0, 0, 0x0c, 0, 0, 0, 1][..];
		let header = ExtendedChunkHeader::read(&mut data).unwrap();
		assert_eq!(0x17, header.ty);
		assert_eq!(12, header.size);
		assert_eq!(1, header.entries);
		assert!(data.is_empty());
	}

	#[test]
	fn test_extended_header_filename() {
		let mut data = &[0, 0, 0, 0x36, 0, 0, 0, 0x08, 0, 0x02, b'A'][..];
		let header = ExtendedChunkHeader::read(&mut data).unwrap();
		assert_eq!(2, header.entries);
		assert_eq!(&[b'A'], data);
	}

	#[test]
	fn test_extended_header_face_mat_size() {
		let mut data = &[0, 0, 0, 0x1a, 0, 0, 0, 0x0a, 0, 0, 0, 3][..];
		let header = ExtendedChunkHeader::read(&mut data).unwrap();
		assert_eq!(18, header.size);
		assert_eq!(3, header.entries);
	}

	#[test]
	fn test_truncated_header() {
		let mut data = &[0, 0, 0, 0x17, 0, 0][..];
		assert_eq!(ErrorKind::TruncatedStream, ChunkHeader::read(&mut data).unwrap_err().kind());

		let mut data = &[0, 0, 0, 0x17, 0, 0, 0, 0x0c, 0][..];
		assert_eq!(ErrorKind::TruncatedStream,
			ExtendedChunkHeader::read(&mut data).unwrap_err().kind());
	}

	#[test]
	fn test_optional_and_terminator() {
		let mut data = &[0u8; 8][..];
		assert_eq!(None, ChunkHeader::read_optional(ChunkType::MaterialList, &mut data).unwrap());

		let mut data = &[0, 0, 0, 0x16, 0, 0, 0, 4][..];
		let header = ChunkHeader::read_optional(ChunkType::MaterialList, &mut data).unwrap();
		assert_eq!(Some(ChunkHeader { ty: 0x16, size: 4 }), header);

		let mut data = &[0, 0, 0, 0x17, 0, 0, 0, 4][..];
		match ChunkHeader::read_optional(ChunkType::MaterialList, &mut data) {
			Err(DecodeError::UnexpectedChunk { expected: 0x16, found: 0x17, size: 4 }) => (),
			other => panic!("unexpected result: {:?}", other),
		}

		// a zero type with a nonzero size is not a terminator
		let mut data = &[0, 0, 0, 0, 0, 0, 0, 4][..];
		assert_eq!(ErrorKind::FormatViolation,
			ChunkHeader::read_terminator(&mut data).unwrap_err().kind());
	}

	#[test]
	fn test_file_header() {
		let mut data = &[0, 0, 0, 0x12, 0, 0, 0, 8, 0, 0, 0xfa, 0xce, 0, 0, 0, 0][..];
		let header = FileHeader::read(&mut data).unwrap();
		assert_eq!(Some(FileType::Mesh), header.kind());

		let mut data = &[0, 0, 0, 0x12, 0, 0, 0, 8, 0, 0, 0, 0x42, 0, 0, 0, 0][..];
		assert_eq!(None, FileHeader::read(&mut data).unwrap().kind());

		let header = FileHeader { file_type: 0x2, reserved: 0 };
		assert!(header.check(FileType::Pixelmap, &ImportCfg::strict()).is_ok());
		assert!(header.check(FileType::Mesh, &ImportCfg::default()).is_ok());
		assert_eq!(ErrorKind::FormatViolation,
			header.check(FileType::Mesh, &ImportCfg::strict()).unwrap_err().kind());

		let mut data = &[0, 0, 0, 0x12, 0, 0, 0, 9, 0, 0, 0, 1, 0, 0, 0, 0][..];
		assert_eq!(ErrorKind::FormatViolation, FileHeader::read(&mut data).unwrap_err().kind());
	}

	#[test]
	fn test_read_name() {
		let mut data = &b"wheel\x00"[..];
		assert_eq!("WHEEL", read_name(&mut data).unwrap());

		let mut data = &b"whe"[..];
		assert_eq!(ErrorKind::TruncatedStream, read_name(&mut data).unwrap_err().kind());
	}
}
