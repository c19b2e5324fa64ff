use crate::data::document::{ComponentKind, ElementType};
use crate::decode::codec::Component;
use crate::decode::resolve::ResolvedView;
use crate::error::ExtractError;

/// A decoded accessor, tagged by its component type.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedArray {
    F32(Vec<f32>),
    U16(Vec<u16>),
}

impl DecodedArray {
    /// A zeroed array large enough for every element of `view`.
    pub fn for_view(view: &ResolvedView) -> Result<Self, ExtractError> {
        if !is_supported(view) {
            return Err(unsupported(view));
        }

        let length = output_length(view)?;

        match view.component_kind {
            ComponentKind::Uint16 => Ok(DecodedArray::U16(vec![0; length])),
            _ => Ok(DecodedArray::F32(vec![0.0; length])),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            DecodedArray::F32(values) => values.len(),
            DecodedArray::U16(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Decodes every element of `view` into `output`.
///
/// On a decode failure the elements before the failing one keep their decoded
/// values and the rest of `output` is left untouched.
pub fn extract(view: &ResolvedView, output: &mut DecodedArray) -> Result<(), ExtractError> {
    if !is_supported(view) {
        return Err(unsupported(view));
    }

    match (output, view.component_kind) {
        (DecodedArray::F32(values), ComponentKind::Float32) => extract_components(view, values),
        (DecodedArray::U16(values), ComponentKind::Uint16) => extract_components(view, values),
        _ => Err(unsupported(view)),
    }
}

fn is_supported(view: &ResolvedView) -> bool {
    matches!(
        (view.component_kind, view.element_type),
        (
            ComponentKind::Float32,
            ElementType::Scalar | ElementType::Vec2 | ElementType::Vec3 | ElementType::Vec4
        ) | (ComponentKind::Uint16, ElementType::Scalar)
    )
}

fn output_length(view: &ResolvedView) -> Result<usize, ExtractError> {
    let components = view.element_type.components();

    match view.count.checked_mul(components) {
        Some(length) => Ok(length),
        None => Err(ExtractError::LengthOverflow {
            count: view.count,
            components,
        }),
    }
}

fn unsupported(view: &ResolvedView) -> ExtractError {
    ExtractError::UnsupportedType {
        element_type: view.element_type,
        component_kind: view.component_kind,
    }
}

fn extract_components<T: Component>(
    view: &ResolvedView,
    output: &mut [T],
) -> Result<(), ExtractError> {
    let components = view.element_type.components();
    let expected = output_length(view)?;
    if output.len() != expected {
        return Err(ExtractError::OutputSizeMismatch {
            expected,
            actual: output.len(),
        });
    }

    if view.count == 0 {
        return Ok(());
    }

    let stride = match view.byte_stride {
        Some(stride) => stride,
        None => {
            if view.byte_length % view.count != 0 {
                log::warn!(
                    "Accessor {} spans {} bytes which is not a multiple of its {} elements, \
                     truncating the stride",
                    view.accessor,
                    view.byte_length,
                    view.count,
                );
            }
            view.byte_length / view.count
        }
    };

    let bytes = view.bytes();
    let element_width = T::WIDTH * components;

    for (element, values) in output.chunks_exact_mut(components).enumerate() {
        let start = element * stride;
        let end = (start + element_width.min(stride)).min(bytes.len());
        let span = bytes.get(start..end).unwrap_or(&[]);

        for (component, value) in values.iter_mut().enumerate() {
            let component_start = (component * T::WIDTH).min(span.len());
            let component_end = (component_start + T::WIDTH).min(span.len());

            *value = T::decode(&span[component_start..component_end])
                .map_err(|source| ExtractError::Decode { element, source })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::resolve::resolve;
    use crate::decode::resolve::tests::{accessor, single_view_document};
    use crate::error::CodecError;

    fn f32_bytes(values: &[f32]) -> Vec<u8> {
        values.iter().flat_map(|value| value.to_le_bytes()).collect()
    }

    #[test]
    fn decodes_vec3_positions() {
        let positions = [0.0, 0.5, 0.0, -0.5, -0.5, 0.0, 0.5, -0.5, 0.0];
        let document = single_view_document(
            f32_bytes(&positions),
            vec![accessor(3, 5126, ElementType::Vec3)],
        );
        let view = resolve(&document, 0).unwrap();

        let mut output = DecodedArray::for_view(&view).unwrap();
        extract(&view, &mut output).unwrap();

        assert_eq!(output, DecodedArray::F32(positions.to_vec()));
    }

    #[test]
    fn decodes_vec2_and_scalar_indices() {
        let uvs = [0.0, 1.0, 0.25, 0.75];
        let document =
            single_view_document(f32_bytes(&uvs), vec![accessor(2, 5126, ElementType::Vec2)]);
        let view = resolve(&document, 0).unwrap();
        let mut output = DecodedArray::for_view(&view).unwrap();
        extract(&view, &mut output).unwrap();
        assert_eq!(output, DecodedArray::F32(uvs.to_vec()));

        let indices: Vec<u8> = [0u16, 1, 2, 2, 3, 0]
            .iter()
            .flat_map(|index| index.to_le_bytes())
            .collect();
        let document =
            single_view_document(indices, vec![accessor(6, 5123, ElementType::Scalar)]);
        let view = resolve(&document, 0).unwrap();
        let mut output = DecodedArray::for_view(&view).unwrap();
        extract(&view, &mut output).unwrap();
        assert_eq!(output, DecodedArray::U16(vec![0, 1, 2, 2, 3, 0]));
    }

    #[test]
    fn honours_declared_stride_of_interleaved_views() {
        // position (vec3) followed by a vec2 that is not part of this accessor
        let interleaved = [1.0, 2.0, 3.0, 9.0, 9.0, 4.0, 5.0, 6.0, 9.0, 9.0];
        let mut document = single_view_document(
            f32_bytes(&interleaved),
            vec![accessor(2, 5126, ElementType::Vec3)],
        );
        document.buffer_views[0].byte_stride = Some(20);

        let view = resolve(&document, 0).unwrap();
        let mut output = DecodedArray::for_view(&view).unwrap();
        extract(&view, &mut output).unwrap();

        assert_eq!(output, DecodedArray::F32(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]));
    }

    #[test]
    fn truncates_uneven_stride() {
        let mut bytes = f32_bytes(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        bytes.push(0xAA);
        let document = single_view_document(bytes, vec![accessor(2, 5126, ElementType::Vec3)]);

        let view = resolve(&document, 0).unwrap();
        assert_eq!(view.byte_length, 25);

        let mut output = DecodedArray::for_view(&view).unwrap();
        extract(&view, &mut output).unwrap();

        assert_eq!(output, DecodedArray::F32(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]));
    }

    #[test]
    fn overstated_count_fills_partially() {
        // 3 vec3 worth of data described as 4 elements: the stride shrinks to 9 bytes
        // and the first element's third component only has a single byte left.
        let document = single_view_document(
            f32_bytes(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]),
            vec![accessor(4, 5126, ElementType::Vec3)],
        );

        let view = resolve(&document, 0).unwrap();
        let mut output = DecodedArray::for_view(&view).unwrap();
        let err = extract(&view, &mut output).unwrap_err();

        assert_eq!(
            err,
            ExtractError::Decode {
                element: 0,
                source: CodecError::LengthMismatch {
                    expected: 4,
                    actual: 1
                }
            }
        );

        let mut expected = vec![0.0; 12];
        expected[0] = 1.0;
        expected[1] = 2.0;
        assert_eq!(output, DecodedArray::F32(expected));
    }

    #[test]
    fn short_buffer_stops_at_failing_element() {
        // two u16 indices of data but the accessor claims three, leaving a 1 byte stride
        let document =
            single_view_document(vec![1, 0, 2, 0], vec![accessor(3, 5123, ElementType::Scalar)]);

        let view = resolve(&document, 0).unwrap();
        let mut output = DecodedArray::for_view(&view).unwrap();
        let err = extract(&view, &mut output).unwrap_err();

        assert_eq!(
            err,
            ExtractError::Decode {
                element: 0,
                source: CodecError::LengthMismatch {
                    expected: 2,
                    actual: 1
                }
            }
        );
        assert_eq!(output, DecodedArray::U16(vec![0; 3]));
    }

    #[test]
    fn unsupported_types_leave_output_zeroed() {
        let document = single_view_document(
            vec![7; 16],
            vec![
                accessor(4, 5121, ElementType::Scalar),
                accessor(1, 5126, ElementType::Mat2),
                accessor(2, 5123, ElementType::Vec2),
            ],
        );

        for accessor_id in 0..3 {
            let view = resolve(&document, accessor_id).unwrap();
            assert!(matches!(
                DecodedArray::for_view(&view),
                Err(ExtractError::UnsupportedType { .. })
            ));
        }

        let view = resolve(&document, 2).unwrap();
        let mut output = DecodedArray::U16(vec![0; 4]);
        assert!(matches!(
            extract(&view, &mut output),
            Err(ExtractError::UnsupportedType {
                element_type: ElementType::Vec2,
                component_kind: ComponentKind::Uint16
            })
        ));
        assert_eq!(output, DecodedArray::U16(vec![0; 4]));
    }

    #[test]
    fn rejects_mismatched_output() {
        let document = single_view_document(
            f32_bytes(&[1.0, 2.0]),
            vec![accessor(2, 5126, ElementType::Scalar)],
        );
        let view = resolve(&document, 0).unwrap();

        let mut wrong_variant = DecodedArray::U16(vec![0; 2]);
        assert!(matches!(
            extract(&view, &mut wrong_variant),
            Err(ExtractError::UnsupportedType { .. })
        ));

        let mut wrong_size = DecodedArray::F32(vec![0.0; 3]);
        assert_eq!(
            extract(&view, &mut wrong_size),
            Err(ExtractError::OutputSizeMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn rejects_overflowing_output_length() {
        let view = ResolvedView {
            accessor: 0,
            count: usize::MAX / 2,
            byte_length: 0,
            byte_offset: 0,
            byte_stride: None,
            element_type: ElementType::Vec3,
            component_kind: ComponentKind::Float32,
            buffer: &[],
        };

        assert_eq!(
            DecodedArray::for_view(&view),
            Err(ExtractError::LengthOverflow {
                count: usize::MAX / 2,
                components: 3
            })
        );

        let mut output = DecodedArray::F32(Vec::new());
        assert!(matches!(
            extract(&view, &mut output),
            Err(ExtractError::LengthOverflow { .. })
        ));
        assert!(output.is_empty());
    }
}
