use std::sync::Arc;
use std::thread;
use std::thread::JoinHandle;

use airprobe_readings::Dataset;
use airprobe_readings::HeaderMode;
use airprobe_readings::SourceLocation;
use airprobe_readings::parse;
use airprobe_readings::slot::Completion;
use airprobe_readings::slot::DatasetSlot;
use tracing::info;

use crate::load::Loader;
use crate::load::error::Result;

/// Loads and parses source locations on worker threads and installs the
/// results into a shared [`DatasetSlot`].
///
/// Requests may overlap; the slot only accepts the result of the latest one.
pub(crate) struct Pipeline<L> {
    loader: Arc<L>,
    slot: Arc<DatasetSlot>,
    header: HeaderMode,
}

impl<L> Pipeline<L>
where
    L: Loader + Send + Sync + 'static,
{
    pub fn new(loader: L, header: HeaderMode) -> Self {
        Self {
            loader: Arc::new(loader),
            slot: Arc::new(DatasetSlot::new()),
            header,
        }
    }

    pub fn slot(&self) -> &Arc<DatasetSlot> {
        &self.slot
    }

    pub fn request(&self, location: SourceLocation) -> JoinHandle<Completion> {
        let ticket = self.slot.request(location);
        let loader = Arc::clone(&self.loader);
        let slot = Arc::clone(&self.slot);
        let header = self.header;

        thread::spawn(move || {
            let result = load_dataset(loader.as_ref(), ticket.location(), header)
                .map_err(|error| error.to_string());

            slot.complete(ticket, result)
        })
    }
}

fn load_dataset<L>(loader: &L, location: &SourceLocation, header: HeaderMode) -> Result<Dataset>
where
    L: Loader + ?Sized,
{
    let text = loader.load(location)?;
    let dataset = parse(&text, header)?;

    info!(%location, records = dataset.len(), "loaded sensor readings");

    Ok(dataset)
}
