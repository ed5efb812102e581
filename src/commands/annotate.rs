use crate::annotate::{Annotation, GcAnnotator, StateAnnotator};
use crate::cli::AnnotateArgs;
use crate::utils::{
    open_output_writer, open_sequence_reader, Result, SequenceReader,
};
use crossbeam_channel::{bounded, Sender};
use rayon::iter::{ParallelBridge, ParallelIterator};
use rayon::ThreadPoolBuilder;
use std::io::{BufRead, Write};
use std::thread;

const CHANNEL_BUFFER_SIZE: usize = 2048;

pub fn annotate(args: AnnotateArgs) -> Result<()> {
    let minimum_feature_size = if args.no_smoothing {
        None
    } else {
        Some(args.min_interval_length)
    };
    let annotator = GcAnnotator::new(args.kmer_length, minimum_feature_size);

    let mut writer = open_output_writer(args.output_path.as_deref())?;

    let reader = open_sequence_reader(&args.seq_path)?;
    let records = SequenceReader::new(reader, args.seq_format);

    let (sender_record, receiver_record) = bounded(CHANNEL_BUFFER_SIZE);
    let record_stream_thread =
        thread::spawn(move || stream_records_into_channel(records, sender_record));

    let (sender_result, receiver_result) = bounded::<(String, Annotation)>(CHANNEL_BUFFER_SIZE);
    let alpha = args.alpha;
    let writer_thread = thread::spawn(move || -> Result<()> {
        for (record_id, annotation) in &receiver_result {
            write_record(&mut writer, &record_id, &annotation, alpha)?;
        }
        writer.flush().map_err(|e| e.to_string())
    });

    log::debug!(
        "Initializing thread pool with {} threads...",
        args.num_threads
    );
    let pool = ThreadPoolBuilder::new()
        .num_threads(args.num_threads)
        .thread_name(|i| format!("gcat-{}", i))
        .build()
        .map_err(|e| format!("Failed to initialize thread pool: {}", e))?;

    pool.install(|| {
        receiver_record
            .into_iter()
            .par_bridge()
            .for_each_with(&sender_result, |sender, record| match record {
                Ok((record_id, sequence)) => {
                    process_record(&annotator, record_id, &sequence, sender)
                }
                Err(err) => log::error!("Record parsing: {}", err),
            });
    });

    // Clean-up
    drop(sender_result);
    writer_thread.join().expect("Writer thread panicked")?;
    match record_stream_thread
        .join()
        .expect("Record stream thread panicked")
    {
        Ok(()) => log::trace!("Record stream thread finished"),
        Err(e) => log::error!("Record streaming failed: {}", e),
    }
    Ok(())
}

fn stream_records_into_channel<B: BufRead>(
    records: SequenceReader<B>,
    sender: Sender<Result<(String, String)>>,
) -> Result<()> {
    for record in records {
        sender
            .send(record)
            .map_err(|e| format!("Failed to queue record: {}", e))?;
    }
    Ok(())
}

fn process_record(
    annotator: &GcAnnotator,
    record_id: String,
    sequence: &str,
    sender: &Sender<(String, Annotation)>,
) {
    match annotator.annotate(sequence) {
        Ok(annotation) => {
            log::debug!("{}: {} intervals", record_id, annotation.intervals().len());
            if let Err(e) = sender.send((record_id, annotation)) {
                log::error!("Failed to send annotation to writer thread: {}", e);
            }
        }
        Err(err) => log::error!("Error annotating record {}: {}", record_id, err),
    }
}

fn write_record(
    writer: &mut Box<dyn Write + Send>,
    record_id: &str,
    annotation: &Annotation,
    alpha: f64,
) -> Result<()> {
    writeln!(writer, ">{}", record_id).map_err(|e| e.to_string())?;
    for interval in annotation.significant_hits(alpha) {
        writeln!(writer, "{}", interval).map_err(|e| e.to_string())?;
    }
    Ok(())
}
