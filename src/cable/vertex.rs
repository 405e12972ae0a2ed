// GPU vertex layout for cable ribbons and the triangle-list buffer that holds them.

// ============================================================================
// GPU VERTEX
// ============================================================================

/// One ribbon vertex as the cable shader reads it (36 bytes, no padding):
///   @location(0) position:  vec3<f32>
///   @location(1) normal:    vec3<f32>   tangent along the cable, unit length
///   @location(2) colour0:   vec4<unorm8> phase offset x, phase offset y, unused, diffuse factor
///   @location(3) texcoord0: vec2<f32>   signed radius, chord distance * micromovement scale
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CableVertex {
    pub position:  [f32; 3],
    pub normal:    [f32; 3],
    pub colour0:   [u8; 4],
    pub texcoord0: [f32; 2],
}

impl CableVertex {
    /// Signed radius carried in `texcoord0.x`.
    pub fn radius(&self) -> f32 {
        self.texcoord0[0]
    }

    /// Same vertex on the opposite side of the ribbon.
    pub fn mirrored(mut self) -> Self {
        self.texcoord0[0] = -self.texcoord0[0];
        self
    }

    const ATTRIBUTES: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x3,
        2 => Unorm8x4,
        3 => Float32x2,
    ];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CableVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

// ============================================================================
// VERTEX BUFFER
// ============================================================================

/// Non-indexed triangle list of cable ribbon vertices.
/// Grouped by piece, then by segment, 6 vertices (2 triangles) per segment.
/// Upload vertex_bytes() to a VERTEX buffer and draw vertex_count() vertices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CableVertexBuffer {
    pub vertices: Vec<CableVertex>,
}

impl CableVertexBuffer {
    /// Cast vertex slice to raw bytes for wgpu buffer upload or file output.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn vertex_count(&self) -> usize   { self.vertices.len() }
    pub fn triangle_count(&self) -> usize { self.vertices.len() / 3 }
    pub fn is_empty(&self) -> bool        { self.vertices.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<CableVertex>(), 36);
        let desc = CableVertex::desc();
        assert_eq!(desc.array_stride, 36);
        let offsets: Vec<_> = desc.attributes.iter().map(|a| a.offset).collect();
        assert_eq!(offsets, vec![0, 12, 24, 28]);
    }

    #[test]
    fn bytes_follow_field_order() {
        let buffer = CableVertexBuffer {
            vertices: vec![CableVertex {
                position:  [1.0, 2.0, 3.0],
                normal:    [0.0, 0.0, 1.0],
                colour0:   [10, 20, 0, 255],
                texcoord0: [-0.02, 0.5],
            }],
        };
        let bytes = buffer.vertex_bytes();
        assert_eq!(bytes.len(), 36);
        assert_eq!(&bytes[0..4], &1.0f32.to_ne_bytes());
        assert_eq!(&bytes[24..28], &[10, 20, 0, 255]);
        assert_eq!(&bytes[28..32], &(-0.02f32).to_ne_bytes());
        assert_eq!(buffer.triangle_count(), 0);
    }

    #[test]
    fn mirrored_flips_radius_only() {
        let v = CableVertex {
            position:  [1.0, 0.0, 0.0],
            normal:    [1.0, 0.0, 0.0],
            colour0:   [0, 0, 0, 255],
            texcoord0: [-0.02, 0.25],
        };
        let m = v.mirrored();
        assert_eq!(m.radius(), 0.02);
        assert_eq!(m.texcoord0[1], 0.25);
        assert_eq!(m.position, v.position);
    }
}
