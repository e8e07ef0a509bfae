//! Material descriptors (.MAT).
//!
//! A material file indexes material names against the pixelmap and shade table they draw with.

use byteorder::{
	BE,
	ReadBytesExt
};

use std::collections::HashMap;

use tracing::debug;

use roadkill_core::{
	chunk::{
		ChunkHeader,
		ChunkType,
		read_name
	},
	DecodeError
};

pub const NUM_PARAMS: usize = 12;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Material {
	pub params: [f32; NUM_PARAMS], // shading parameters?
	pub name: String,
	/// Empty when the material has no texture
	pub pixelmap_name: String,
	pub rendertab_name: String,
}

impl Material {
	#[cfg(feature = "import")]
	pub fn read<R>(buf: &mut R) -> Result<Material, DecodeError>
	where
		R: ReadBytesExt,
	{
		ChunkHeader::read(buf)?.expect(ChunkType::MaterialDesc)?;

		let mut params = [0.0; NUM_PARAMS];
		for p in params.iter_mut() {
			*p = buf.read_f32::<BE>()?;
		}

		let mut mat = Material {
			params: params,
			name: read_name(buf)?,
			..Material::default()
		};
		debug!("Reading material {}", mat.name);

		if ChunkHeader::read_optional(ChunkType::PixelmapRef, buf)?.is_none() {
			return Ok(mat);
		}
		mat.pixelmap_name = read_name(buf)?;

		ChunkHeader::read(buf)?.expect(ChunkType::RenderTabRef)?;
		mat.rendertab_name = read_name(buf)?;

		ChunkHeader::read_terminator(buf)?;

		Ok(mat)
	}

	pub fn has_texture(&self) -> bool {
		!self.pixelmap_name.is_empty()
	}
}

/// Name-keyed set of materials, as meshes reference them
pub type MaterialLibrary = HashMap<String, Material>;

/// Collects materials by name. Later materials replace earlier ones of the same name.
pub fn material_library<I>(materials: I) -> MaterialLibrary
where
	I: IntoIterator<Item = Material>,
{
	materials.into_iter().map(|m| (m.name.clone(), m)).collect()
}
