use fem1d::basis::HatBasis;
use fem1d::io::png::{plot_function, render_function, Canvas, PlotSettings, AXIS, BACKGROUND};
use fem1d::io::vtk::SolutionDataSetBuilder;
use fem1d::solution::Solution;
use nalgebra::DVector;
use std::fs::File;
use std::path::PathBuf;
use vtkio::model::{Attribute, DataSet, IOBuffer, Piece, VertexNumbers};

fn output_dir() -> PathBuf {
    let dir = std::env::temp_dir().join("fem1d_unit_tests");
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn small_settings() -> PlotSettings {
    PlotSettings {
        width: 320,
        height: 240,
        samples: 101,
        margin: 0.1,
    }
}

/// Pixels dominated by the blue channel, as drawn by the curve but not by text or mesh.
fn curve_like_pixels(canvas: &Canvas) -> usize {
    (0..canvas.height())
        .flat_map(|y| (0..canvas.width()).map(move |x| (x, y)))
        .filter_map(|(x, y)| canvas.pixel(x, y))
        .filter(|&[r, _, b]| b as i32 - r as i32 > 60)
        .count()
}

const TITLE: &str = "4 probing functions, 10 integration points, 6 Legendre polynomial roots";

#[test]
fn canvas_starts_blank() {
    let canvas = Canvas::new(4, 3);
    assert_eq!(canvas.data().len(), 36);
    assert_eq!(canvas.pixel(3, 2), Some(BACKGROUND));
    assert_eq!(canvas.pixel(4, 0), None);
}

#[test]
fn plot_has_configured_size_and_draws_curve() {
    let canvas = plot_function(|x| x, -1.0, 1.0, &small_settings(), TITLE).unwrap();
    assert_eq!(canvas.width(), 320);
    assert_eq!(canvas.height(), 240);
    assert_eq!(canvas.data().len(), 3 * 320 * 240);

    assert!(curve_like_pixels(&canvas) > 100);
    assert!(canvas.data().chunks(3).any(|pixel| pixel != BACKGROUND));
    // Margins stay empty
    assert_eq!(canvas.pixel(0, 0), Some(BACKGROUND));
    assert_eq!(canvas.pixel(319, 239), Some(BACKGROUND));
}

#[test]
fn plot_draws_title_as_caption() {
    let titled = plot_function(|x| x * x, 0.0, 2.0, &small_settings(), TITLE).unwrap();
    let untitled = plot_function(|x| x * x, 0.0, 2.0, &small_settings(), "").unwrap();
    assert_ne!(titled.data(), untitled.data());
}

#[test]
fn plot_draws_axes_through_origin() {
    let canvas = plot_function(|x| x, -1.0, 1.0, &small_settings(), "").unwrap();
    assert!(canvas.data().chunks(3).any(|pixel| pixel == AXIS));
    let away_from_origin = plot_function(|x| x + 5.0, 1.0, 2.0, &small_settings(), "").unwrap();
    assert!(!away_from_origin.data().chunks(3).any(|pixel| pixel == AXIS));
}

#[test]
fn plot_rejects_invalid_input() {
    assert!(plot_function(|x| x, 1.0, 1.0, &small_settings(), TITLE).is_err());
    assert!(plot_function(|x| x, 2.0, 1.0, &small_settings(), TITLE).is_err());
    assert!(plot_function(|_| f64::NAN, 0.0, 1.0, &small_settings(), TITLE).is_err());
    let tiny = PlotSettings {
        width: 1,
        ..small_settings()
    };
    assert!(plot_function(|x| x, 0.0, 1.0, &tiny, TITLE).is_err());
    let wide_margin = PlotSettings {
        margin: 0.5,
        ..small_settings()
    };
    assert!(plot_function(|x| x, 0.0, 1.0, &wide_margin, TITLE).is_err());
}

#[test]
fn plot_tolerates_singular_samples_and_constants() {
    let singular = plot_function(|x| 1.0 / x, 0.0, 1.0, &small_settings(), TITLE).unwrap();
    assert!(curve_like_pixels(&singular) > 0);
    let constant = plot_function(|_| 0.0, 0.0, 1.0, &small_settings(), TITLE).unwrap();
    assert!(curve_like_pixels(&constant) > 0);
}

#[test]
fn rendered_png_has_configured_size_and_title() {
    let path = output_dir().join("rendered_png_has_configured_size_and_title.png");
    render_function(|x| x * x, 0.0, 2.0, &path, &small_settings(), TITLE).unwrap();

    let decoder = png::Decoder::new(File::open(&path).unwrap());
    let mut reader = decoder.read_info().unwrap();
    let info = reader.info();
    assert_eq!((info.width, info.height), (320, 240));
    assert!(info
        .uncompressed_latin1_text
        .iter()
        .any(|chunk| chunk.keyword == "Title" && chunk.text == TITLE));

    let mut buffer = vec![0; reader.output_buffer_size()];
    reader.next_frame(&mut buffer).unwrap();
    let expected = plot_function(|x| x * x, 0.0, 2.0, &small_settings(), TITLE).unwrap();
    assert_eq!(&buffer[..expected.data().len()], expected.data());
}

#[test]
fn vtk_data_set_has_line_cells_and_solution_values() {
    let basis = HatBasis::new(0.0, 1.0, 5);
    let solution = Solution::new(&basis, DVector::from_vec(vec![4.0, 3.0, 2.0, 1.0]));
    let dataset = SolutionDataSetBuilder::from_solution(&solution).try_build().unwrap();

    let DataSet::UnstructuredGrid { pieces, .. } = dataset else {
        panic!("expected an unstructured grid");
    };
    assert_eq!(pieces.len(), 1);
    let Piece::Inline(piece) = &pieces[0] else {
        panic!("expected an inline piece");
    };

    let IOBuffer::F64(points) = &piece.points else {
        panic!("expected f64 points");
    };
    assert_eq!(points.len(), 15);
    assert_eq!(&points[12..], &[1.0, 0.0, 0.0]);

    let VertexNumbers::Legacy { num_cells, vertices } = &piece.cells.cell_verts else {
        panic!("expected legacy vertex numbers");
    };
    assert_eq!(*num_cells, 4);
    assert_eq!(&vertices[..6], &[2, 0, 1, 2, 1, 2]);
    assert_eq!(piece.cells.types.len(), 4);

    let Attribute::DataArray(array) = &piece.data.point[0] else {
        panic!("expected a data array attribute");
    };
    assert_eq!(array.name, "solution");
    let IOBuffer::F64(values) = &array.data else {
        panic!("expected f64 values");
    };
    assert_eq!(values, &vec![4.0, 3.0, 2.0, 1.0, 0.0]);
}

#[test]
fn vtk_export_writes_file() {
    let basis = HatBasis::new(0.0, 1.0, 5);
    let solution = Solution::new(&basis, DVector::from_vec(vec![4.0, 3.0, 2.0, 1.0]));
    let path = output_dir().join("vtk_export_writes_file.vtk");
    SolutionDataSetBuilder::from_solution(&solution)
        .with_title("solution")
        .try_export(&path)
        .unwrap();
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}
