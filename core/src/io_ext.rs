use byteorder::{
	BE,
	ReadBytesExt
};

use std::io::{
	BufRead,
	Read,
	Result
};

use ultraviolet::vec::{
	Vec2,
	Vec3
};

pub trait ReadBinExt: Read {
	/// Reads a null-terminated string, uppercasing every byte.
	///
	/// Names are stored in mixed case but referenced case-insensitively across files, so every
	/// decoded name is kept in its uppercase form.
	#[inline]
	fn read_cstr_upper(&mut self) -> Result<String> {
		let mut s = String::new();
		let mut buf = [1; 1];

		while buf[0] != 0 {
			self.read_exact(&mut buf)?;
			if buf[0] != 0 {
				s.push(buf[0].to_ascii_uppercase() as char);
			}
		}

		Ok(s)
	}

	/// Reads a big endian 2D vector
	#[inline]
	fn read_vec2_be(&mut self) -> Result<Vec2> {
		let x = self.read_f32::<BE>()?;
		let y = self.read_f32::<BE>()?;

		Ok(Vec2::new(x, y))
	}

	/// Reads a big endian 3D vector
	#[inline]
	fn read_vec3_be(&mut self) -> Result<Vec3> {
		let x = self.read_f32::<BE>()?;
		let y = self.read_f32::<BE>()?;
		let z = self.read_f32::<BE>()?;

		Ok(Vec3::new(x, y, z))
	}
}

impl<R> ReadBinExt for R
where
	R: Read + ?Sized,
{
}

/// Returns true if no bytes remain, without consuming any
pub fn at_eof<R>(buf: &mut R) -> Result<bool>
where
	R: BufRead + ?Sized,
{
	Ok(buf.fill_buf()?.is_empty())
}
