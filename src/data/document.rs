use crate::resource::gltf::asset::GltfAsset;
use crate::resource::gltf::loader::GltfLoader;

pub const GL_FLOAT: u32 = 5126;
pub const GL_UNSIGNED_SHORT: u32 = 5123;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Scalar,
    Vec2,
    Vec3,
    Vec4,
    Mat2,
    Mat3,
    Mat4,
}

impl ElementType {
    pub fn components(self) -> usize {
        match self {
            ElementType::Scalar => 1,
            ElementType::Vec2 => 2,
            ElementType::Vec3 => 3,
            ElementType::Vec4 => 4,
            ElementType::Mat2 => 4,
            ElementType::Mat3 => 9,
            ElementType::Mat4 => 16,
        }
    }
}

impl From<gltf::accessor::Dimensions> for ElementType {
    fn from(value: gltf::accessor::Dimensions) -> Self {
        match value {
            gltf::accessor::Dimensions::Scalar => ElementType::Scalar,
            gltf::accessor::Dimensions::Vec2 => ElementType::Vec2,
            gltf::accessor::Dimensions::Vec3 => ElementType::Vec3,
            gltf::accessor::Dimensions::Vec4 => ElementType::Vec4,
            gltf::accessor::Dimensions::Mat2 => ElementType::Mat2,
            gltf::accessor::Dimensions::Mat3 => ElementType::Mat3,
            gltf::accessor::Dimensions::Mat4 => ElementType::Mat4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Float32,
    Uint16,
    Unknown,
}

impl ComponentKind {
    pub fn from_gl_code(code: u32) -> Self {
        match code {
            GL_FLOAT => ComponentKind::Float32,
            GL_UNSIGNED_SHORT => ComponentKind::Uint16,
            _ => ComponentKind::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorDescriptor {
    pub count: usize,
    /// Raw GL enum of the component type, e.g. `5126` for `FLOAT`.
    pub component_type: u32,
    pub element_type: ElementType,
    pub buffer_view: Option<usize>,
    /// Offset of the first element relative to the start of the buffer view.
    pub byte_offset: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferViewDescriptor {
    pub buffer: usize,
    pub byte_offset: usize,
    pub byte_length: usize,
    pub byte_stride: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buffer {
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrimitiveDescriptor {
    pub index: usize,
    pub position: Option<usize>,
    pub normal: Option<usize>,
    pub tex_coord_0: Option<usize>,
    pub indices: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeshDescriptor {
    pub index: usize,
    pub name: Option<String>,
    pub primitives: Vec<PrimitiveDescriptor>,
}

/// Geometry tables of a parsed glTF asset together with the loaded buffer blobs.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub accessors: Vec<AccessorDescriptor>,
    pub buffer_views: Vec<BufferViewDescriptor>,
    pub buffers: Vec<Buffer>,
    pub meshes: Vec<MeshDescriptor>,
}

impl Document {
    pub fn load(loader: &mut impl GltfLoader) -> Self {
        let buffer_count = loader.asset().gltf().buffers().count();

        let mut buffers = Vec::with_capacity(buffer_count);
        for buffer_id in 0..buffer_count {
            let data = match loader.load_buffer_data(buffer_id) {
                Ok(data) => data,
                Err(err) => {
                    log::error!(
                        "Unable to load glTF buffer {buffer_id}, treating it as empty: {err}"
                    );
                    Vec::new()
                }
            };
            buffers.push(Buffer { data });
        }

        let parsed = loader.asset().gltf();

        let accessors = parsed
            .accessors()
            .map(|accessor| AccessorDescriptor {
                count: accessor.count(),
                component_type: accessor.data_type().as_gl_enum(),
                element_type: accessor.dimensions().into(),
                buffer_view: accessor.view().map(|view| view.index()),
                byte_offset: accessor.offset(),
            })
            .collect();

        let buffer_views = parsed
            .views()
            .map(|view| BufferViewDescriptor {
                buffer: view.buffer().index(),
                byte_offset: view.offset(),
                byte_length: view.length(),
                byte_stride: view.stride(),
            })
            .collect();

        let meshes = parsed
            .meshes()
            .map(|mesh| MeshDescriptor {
                index: mesh.index(),
                name: mesh.name().map(String::from),
                primitives: mesh
                    .primitives()
                    .map(|primitive| PrimitiveDescriptor {
                        index: primitive.index(),
                        position: primitive
                            .get(&gltf::Semantic::Positions)
                            .map(|accessor| accessor.index()),
                        normal: primitive
                            .get(&gltf::Semantic::Normals)
                            .map(|accessor| accessor.index()),
                        tex_coord_0: primitive
                            .get(&gltf::Semantic::TexCoords(0))
                            .map(|accessor| accessor.index()),
                        indices: primitive.indices().map(|accessor| accessor.index()),
                    })
                    .collect(),
            })
            .collect();

        Self {
            accessors,
            buffer_views,
            buffers,
            meshes,
        }
    }
}
