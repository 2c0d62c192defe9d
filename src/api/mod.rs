pub mod frb; // FFI API for flutter_rust_bridge
