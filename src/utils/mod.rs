mod gc;
mod io_utils;
mod math;
mod readers;

pub use gc::compute_gc_content;
pub use io_utils::open_output_writer;
pub use math::{kmeans, two_proportion_ztest, Alternative};
pub use readers::{open_sequence_reader, SeqFormat, SequenceReader};

pub type Result<T> = std::result::Result<T, String>;

pub fn handle_error_and_exit(err: String) -> ! {
    log::error!("{}", err);
    std::process::exit(1);
}
