//! Export of solutions to legacy VTK files.
use crate::solution::Solution;
use eyre::eyre;
use std::path::Path;
use vtkio::model::{
    Attribute, Attributes, ByteOrder, CellType, Cells, DataArray, DataSet, ElementType, IOBuffer, Piece,
    UnstructuredGridPiece, Version, VertexNumbers, Vtk,
};

/// Builds a VTK unstructured grid of line cells from the mesh of a solution, with the
/// nodal values of $u_h$ attached as the point attribute `solution`.
pub struct SolutionDataSetBuilder<'a, B> {
    solution: &'a Solution<'a, B>,

    // Only used for exporting directly to file
    title: Option<String>,
}

impl<'a, B> SolutionDataSetBuilder<'a, B>
where
    B: Fn(f64) -> f64,
{
    pub fn from_solution(solution: &'a Solution<'a, B>) -> Self {
        Self { solution, title: None }
    }

    pub fn with_title(self, title: impl Into<String>) -> Self {
        Self {
            solution: self.solution,
            title: Some(title.into()),
        }
    }

    pub fn try_build(&self) -> eyre::Result<DataSet> {
        let basis = self.solution.basis();
        let num_points = basis.num_points();
        let num_cells = num_points - 1;

        let mut points = Vec::with_capacity(3 * num_points);
        let mut values = Vec::with_capacity(num_points);
        for i in 0..num_points {
            let x = basis.node(i);
            points.extend_from_slice(&[x, 0.0, 0.0]);
            values.push(self.solution.result_at(x));
        }

        // Vertices is laid out as follows: N, i_1, i_2, ... i_N,
        // so for lines this becomes 2 followed by the two end points
        let mut vertices = Vec::with_capacity(3 * num_cells);
        for j in 0..num_cells {
            vertices.push(2);
            vertices.push(u32::try_from(j)?);
            vertices.push(u32::try_from(j + 1)?);
        }

        let solution_attribute = Attribute::DataArray(DataArray {
            name: "solution".to_string(),
            elem: ElementType::Scalars {
                num_comp: 1,
                lookup_table: None,
            },
            data: IOBuffer::F64(values),
        });

        let piece = UnstructuredGridPiece {
            points: IOBuffer::F64(points),
            cells: Cells {
                cell_verts: VertexNumbers::Legacy {
                    num_cells: u32::try_from(num_cells)?,
                    vertices,
                },
                types: vec![CellType::Line; num_cells],
            },
            data: Attributes {
                point: vec![solution_attribute],
                cell: Vec::new(),
            },
        };

        Ok(DataSet::UnstructuredGrid {
            meta: None,
            pieces: vec![Piece::Inline(Box::new(piece))],
        })
    }

    /// Convenience function for directly exporting the dataset to a file.
    pub fn try_export(&self, filename: impl AsRef<Path>) -> eyre::Result<()> {
        let filepath = filename.as_ref();
        let fallback_title = filepath
            .file_stem()
            .map(|os_str| os_str.to_string_lossy().to_string())
            .unwrap_or_else(|| "untitled".to_string());
        let dataset = self.try_build()?;
        Vtk {
            version: Version { major: 4, minor: 1 },
            // If we don't have a title then just make the filepath the title
            title: self.title.clone().unwrap_or(fallback_title),
            byte_order: ByteOrder::BigEndian,
            data: dataset,
            file_path: None,
        }
        .export(filepath)
        .map_err(|err| eyre!("failed to export VTK file {}: {}", filepath.display(), err))
    }
}
