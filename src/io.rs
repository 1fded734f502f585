//! Output of solutions as raster plots and VTK files.
pub mod png;
pub mod vtk;
