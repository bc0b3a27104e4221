use std::collections::BTreeMap;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering::SeqCst;

pub type Statemap = &'static BTreeMap<u32, AtomicUsize>;

macro_rules! statemap {
    ($($key:literal),*$(,)?) => {{
        #[allow(unused_mut)]
        let mut map = std::collections::BTreeMap::new();
        $(map.insert($key, std::sync::atomic::AtomicUsize::new(0));)*
        let map: &'static _ = Box::leak(Box::new(map));
        map
    }};
}

#[track_caller]
pub fn statemap_put(statemap: Statemap, key: u32) {
    if let Some(counter) = statemap.get(&key) {
        counter.fetch_add(1, SeqCst);
    } else {
        panic!("incorrect state {key:#010X}");
    }
}

#[track_caller]
pub fn statemap_check_exhaustive(statemap: Statemap) {
    for (key, counter) in statemap {
        assert!(counter.load(SeqCst) != 0, "{key:#010X} not triggered");
    }
}
