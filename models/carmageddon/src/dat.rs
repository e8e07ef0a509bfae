//! Mesh geometry (.DAT).
//!
//! A mesh is a fixed sequence of chunks:
//! file name, vertices, texture coordinates, faces, then optionally the material names and the
//! per-face material indices, closed by the terminator.

use byteorder::{
	BE,
	ReadBytesExt
};

use std::collections::HashMap;

use tracing::{
	debug,
	trace,
	warn
};

use ultraviolet::vec::{
	Vec2,
	Vec3
};

use roadkill_core::{
	chunk::{
		ChunkHeader,
		ChunkType,
		ExtendedChunkHeader,
		read_name
	},
	DecodeError,
	io_ext::ReadBinExt
};

use crate::mat::{
	Material,
	MaterialLibrary
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Face {
	pub v1: i16,
	pub v2: i16,
	pub v3: i16,
	pub flags: i16, // mostly a single bit set, but not always
	pub unknown: i8,
	/// Only valid once the face material list has been read
	pub material_id: i16,
}

impl Face {
	#[cfg(feature = "import")]
	pub fn read<R>(buf: &mut R) -> Result<Face, DecodeError>
	where
		R: ReadBytesExt,
	{
		Ok(Face {
			v1: buf.read_i16::<BE>()?,
			v2: buf.read_i16::<BE>()?,
			v3: buf.read_i16::<BE>()?,
			flags: buf.read_i16::<BE>()?,
			unknown: buf.read_i8()?,
			material_id: 0,
		})
	}

	pub fn indices(&self) -> [i16; 3] {
		[self.v1, self.v2, self.v3]
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
	pub name: String,
	pub vertices: Vec<Vec3>,
	pub uvcoords: Vec<Vec2>,
	pub faces: Vec<Face>,
	pub material_names: Vec<String>,
	pub materials: HashMap<String, Material>,
}

impl Mesh {
	#[cfg(feature = "import")]
	pub fn read<R>(buf: &mut R) -> Result<Mesh, DecodeError>
	where
		R: ReadBytesExt,
	{
		ExtendedChunkHeader::read(buf)?.expect(ChunkType::FileName)?;
		let mut mesh = Mesh {
			name: read_name(buf)?,
			..Mesh::default()
		};
		debug!("Reading mesh {}", mesh.name);

		let header = ExtendedChunkHeader::read(buf)?.expect(ChunkType::VertexList)?;
		for _ in 0..header.entries {
			mesh.vertices.push(buf.read_vec3_be()?);
		}

		let header = ExtendedChunkHeader::read(buf)?.expect(ChunkType::UvMapList)?;
		for _ in 0..header.entries {
			mesh.uvcoords.push(buf.read_vec2_be()?);
		}

		let header = ExtendedChunkHeader::read(buf)?.expect(ChunkType::FaceList)?;
		for _ in 0..header.entries {
			mesh.faces.push(Face::read(buf)?);
		}
		trace!(vertices = mesh.vertices.len(), uvcoords = mesh.uvcoords.len(),
			faces = mesh.faces.len(), "mesh geometry");

		// some sub-meshes end without defining materials
		if ChunkHeader::read_optional(ChunkType::MaterialList, buf)?.is_none() {
			return Ok(mesh);
		}

		let count = buf.read_u32::<BE>()?;
		for _ in 0..count {
			mesh.material_names.push(read_name(buf)?);
		}

		let header = ExtendedChunkHeader::read(buf)?.expect(ChunkType::FaceMatList)?;
		if header.entries as usize != mesh.faces.len() {
			return Err(DecodeError::FaceMaterialCount {
				faces: mesh.faces.len(),
				entries: header.entries as usize,
			});
		}

		let _reserved = buf.read_u32::<BE>()?;
		for face in mesh.faces.iter_mut() {
			face.material_id = buf.read_i16::<BE>()?;
		}

		ChunkHeader::read_terminator(buf)?;

		Ok(mesh)
	}

	/// Returns the name of the material a face uses.
	///
	/// Material ids are 1-based, 0 marks an untextured face.
	pub fn face_material(&self, face: &Face) -> Option<&str> {
		let id = usize::try_from(face.material_id).ok()?;
		if id == 0 {
			return None;
		}

		self.material_names.get(id - 1).map(String::as_str)
	}

	/// Attaches the materials this mesh names from a library
	pub fn bind_materials(&mut self, library: &MaterialLibrary) {
		for name in self.material_names.iter() {
			match library.get(name) {
				Some(mat) => {
					self.materials.insert(name.clone(), mat.clone());
				},
				None => warn!("Mesh {} uses unknown material {}", self.name, name),
			}
		}
	}
}
