//! Error types for the library, generated by `error_chain!`.
//!
//! Other modules `use crate::errors::*;` to get `Error`, `ErrorKind`, `Result` and `ResultExt`.

// error_chain 0.12 still implements `Error::description`.
#![allow(deprecated)]

use error_chain::error_chain;

error_chain! {

    foreign_links {
        Io(::std::io::Error);
        Json(::serde_json::Error);
    }

    errors {
        InvalidDimension(rows: usize, columns: usize) {
            description("invalid grid dimension")
            display("invalid grid dimension {}x{}: rows and columns must both be at least 1",
                    rows, columns)
        }

        InvalidCellSize(width: f32, height: f32) {
            description("invalid cell size")
            display("invalid cell size {}x{}: width and height must be positive and finite",
                    width, height)
        }

        InvalidThickness(thickness: f32) {
            description("invalid wall thickness")
            display("invalid wall thickness {}: must be positive and finite", thickness)
        }
    }
}
