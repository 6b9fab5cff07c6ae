// Keeps the outcome of each answered exercise.

use crate::evaluation::Evaluation;
use crate::traits::{ExerciseKind, ExerciseRecord, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Clone, Deserialize, Serialize)]
pub struct Record {
    pub exercise: ExerciseRecord,
    pub evaluation: Evaluation,
    pub time: std::time::SystemTime,
}

/// Something to track past performance.
pub trait Recorder: std::fmt::Debug {
    /// Store an answer.
    fn store_record(&mut self, record: &Record) -> Result<()>;

    /// All records, oldest first.
    fn records(&self) -> Result<Vec<Record>>;

    /// Retrieve records by the kind of exercise.
    fn records_by_kind(&self, kind: ExerciseKind) -> Result<Vec<Record>> {
        Ok(self
            .records()?
            .into_iter()
            .filter(|z| z.exercise.kind == kind)
            .collect::<_>())
    }
}

/// Recorder that only keeps all records in memory, but it is (de)serializable to easily allow
/// reuse of it in other recorders.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct MemoryRecorder {
    records: Vec<Record>,
}

impl MemoryRecorder {
    pub fn new() -> Self {
        MemoryRecorder { records: vec![] }
    }
}

impl Recorder for MemoryRecorder {
    fn store_record(&mut self, record: &Record) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn records(&self) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }
}

/// A recorder that reads and writes a yaml file.
#[derive(Debug)]
pub struct YamlRecorder {
    recorder: MemoryRecorder,
    filename: String,
}

impl YamlRecorder {
    /// Create a new yaml recorder, storing data in filename and if this file already exists it
    /// will load data from there when created.
    pub fn new(filename: &str) -> Result<Self> {
        let recorder: MemoryRecorder = if std::path::Path::new(filename).exists() {
            let file = std::fs::File::open(filename)?;
            serde_yaml::from_reader(file)?
        } else {
            Default::default()
        };
        tracing::debug!(filename, records = recorder.records.len(), "opened yaml recorder");

        Ok(YamlRecorder {
            filename: filename.to_owned(),
            recorder,
        })
    }

    /// Write the data to the disk.
    pub fn write(&mut self) -> Result<()> {
        use std::fs::OpenOptions;
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.filename)?;
        serde_yaml::to_writer(file, &self.recorder)?;
        Ok(())
    }
}

impl Recorder for YamlRecorder {
    fn store_record(&mut self, record: &Record) -> Result<()> {
        self.recorder.store_record(record)?;
        if let Err(e) = self.write() {
            // Memory must not hold records the file does not.
            self.recorder.records.pop();
            return Err(e);
        }
        Ok(())
    }

    fn records(&self) -> Result<Vec<Record>> {
        self.recorder.records()
    }
}
