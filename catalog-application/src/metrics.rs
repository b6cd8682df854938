use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    items_inserted: AtomicU64,
    images_stored: AtomicU64,
    store_errors: AtomicU64,
}

impl Metrics {
    pub fn record_item_inserted(&self) {
        self.items_inserted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_image_stored(&self) {
        self.images_stored.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_store_error(&self) {
        self.store_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn items_inserted(&self) -> u64 {
        self.items_inserted.load(Ordering::Relaxed)
    }

    pub fn store_errors(&self) -> u64 {
        self.store_errors.load(Ordering::Relaxed)
    }

    pub fn render_prometheus(&self) -> String {
        let inserted = self.items_inserted.load(Ordering::Relaxed);
        let images = self.images_stored.load(Ordering::Relaxed);
        let errors = self.store_errors.load(Ordering::Relaxed);

        format!(
            "# TYPE catalog_items_inserted_total counter\n\
catalog_items_inserted_total {}\n\
# TYPE catalog_images_stored_total counter\n\
catalog_images_stored_total {}\n\
# TYPE catalog_store_errors_total counter\n\
catalog_store_errors_total {}\n",
            inserted, images, errors
        )
    }
}
