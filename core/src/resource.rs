use std::{
	fs::File,
	io::{
		BufRead,
		BufReader
	},
	path::Path
};

use tracing::debug;

use crate::{
	cfg::ImportCfg,
	chunk::{
		FileHeader,
		FileType
	},
	error::DecodeError,
	io_ext::at_eof
};

/// Reads a resource file: one file header, then records up to the end of the stream.
///
/// The stream may only end on a record boundary.
#[cfg(feature = "import")]
pub fn read_records<R, T, F>(expected: FileType, cfg: &ImportCfg, buf: &mut R, mut record: F)
	-> Result<Vec<T>, DecodeError>
where
	R: BufRead,
	F: FnMut(&mut R) -> Result<T, DecodeError>,
{
	let header = FileHeader::read(buf)?;
	header.check(expected, cfg)?;

	let mut records = vec![];
	while !at_eof(buf)? {
		records.push(record(buf)?);
	}
	debug!("Read {} records of file type {:#x}", records.len(), header.file_type);

	Ok(records)
}

/// Opens a resource file for buffered reading
pub fn open<P>(path: P) -> Result<BufReader<File>, DecodeError>
where
	P: AsRef<Path>,
{
	let path = path.as_ref();
	debug!("Opening {}", path.display());

	Ok(BufReader::new(File::open(path)?))
}
