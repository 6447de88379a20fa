use std::sync::{Arc, Mutex};

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Registry;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

struct LevelRecorder(Arc<Mutex<Vec<Level>>>);

impl<S: Subscriber> Layer<S> for LevelRecorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        self.0.lock().unwrap().push(*event.metadata().level());
    }
}

/// Run `f` with a thread-local subscriber and return the level of every
/// event it emitted.
pub fn capture_levels<T>(f: impl FnOnce() -> T) -> (T, Vec<Level>) {
    let levels = Arc::new(Mutex::new(Vec::new()));
    let subscriber = Registry::default().with(LevelRecorder(Arc::clone(&levels)));
    let result = tracing::subscriber::with_default(subscriber, f);
    let levels = levels.lock().unwrap().clone();
    (result, levels)
}

pub fn count_level(levels: &[Level], level: Level) -> usize {
    levels.iter().filter(|l| **l == level).count()
}
