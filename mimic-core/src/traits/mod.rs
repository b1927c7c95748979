pub mod export_sink;

pub use export_sink::IExportSink;
