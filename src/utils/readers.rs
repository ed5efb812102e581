use super::Result;
use bio::io::{fasta, fastq};
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, Read as ioRead};
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqFormat {
    Fasta,
    Fastq,
}

impl FromStr for SeqFormat {
    type Err = &'static str;
    fn from_str(format: &str) -> std::result::Result<Self, Self::Err> {
        match format {
            "fasta" => Ok(SeqFormat::Fasta),
            "fastq" => Ok(SeqFormat::Fastq),
            _ => Err("Invalid sequence format"),
        }
    }
}

pub fn open_sequence_reader(path: &Path) -> Result<BufReader<Box<dyn ioRead + Send>>> {
    fn is_gzipped(path: &Path) -> bool {
        let path_str = path.to_string_lossy().to_lowercase();
        path_str.ends_with(".gz") || path_str.ends_with(".gzip")
    }
    let file = File::open(path).map_err(|e| format!("File {}: {}", path.display(), e))?;
    if is_gzipped(path) {
        let gz_decoder = MultiGzDecoder::new(file);
        if gz_decoder.header().is_some() {
            Ok(BufReader::new(Box::new(gz_decoder)))
        } else {
            Err(format!("Invalid gzip header: {}", path.to_string_lossy()))
        }
    } else {
        Ok(BufReader::new(Box::new(file)))
    }
}

enum RecordsInner<B: BufRead> {
    Fasta(fasta::Records<B>),
    Fastq(fastq::Records<B>),
}

/// Streams `(record id, uppercased sequence)` pairs out of a FASTA or
/// FASTQ source.
pub struct SequenceReader<B: BufRead> {
    inner: RecordsInner<B>,
}

impl<B: BufRead> SequenceReader<B> {
    pub fn new(reader: B, format: SeqFormat) -> Self {
        let inner = match format {
            SeqFormat::Fasta => {
                RecordsInner::Fasta(fasta::Reader::from_bufread(reader).records())
            }
            SeqFormat::Fastq => {
                RecordsInner::Fastq(fastq::Reader::from_bufread(reader).records())
            }
        };
        SequenceReader { inner }
    }
}

impl<B: BufRead> Iterator for SequenceReader<B> {
    type Item = Result<(String, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            RecordsInner::Fasta(records) => records.next().map(|record| {
                let record = record.map_err(|e| format!("Fasta record: {}", e))?;
                Ok((record.id().to_string(), uppercased(record.seq())))
            }),
            RecordsInner::Fastq(records) => records.next().map(|record| {
                let record = record.map_err(|e| format!("Fastq record: {}", e))?;
                Ok((record.id().to_string(), uppercased(record.seq())))
            }),
        }
    }
}

fn uppercased(seq: &[u8]) -> String {
    String::from_utf8_lossy(seq).to_ascii_uppercase()
}
