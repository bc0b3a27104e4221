#![cfg(loom)]

#[macro_use]
mod loom_helpers;

use self::loom_helpers::*;
use drone_cmsis::reg::{Field, RReg, Reg, RwReg, WReg};
use loom::sync::atomic::AtomicU32;
use loom::sync::Arc;
use std::sync::atomic::Ordering::SeqCst;

/// Register with separate bus load and store transactions.
struct Bus(AtomicU32);

impl Reg for Bus {
    type Raw = u32;
}

impl RReg for Bus {
    unsafe fn load(&self) -> u32 {
        self.0.load(SeqCst)
    }
}

impl WReg for Bus {
    unsafe fn store(&self, raw: u32) {
        self.0.store(raw, SeqCst);
    }
}

const UE: Field = Field::new(0, 0x1);
const TE: Field = Field::new(3, 0x8);

#[test]
fn loom_concurrent_modify_may_lose_update() {
    let states = statemap![0x0000_0009, 0x0000_0001, 0x0000_0008];
    loom::model(|| {
        let reg = Arc::new(Bus(AtomicU32::new(0)));
        let other = Arc::clone(&reg);
        let handler = loom::thread::spawn(move || unsafe { other.modify([(TE, 1)]) });
        unsafe { reg.modify([(UE, 1)]) };
        handler.join().unwrap();
        statemap_put(states, unsafe { reg.load() });
    });
    statemap_check_exhaustive(states);
}

#[test]
fn loom_serialized_modify_keeps_both() {
    let states = statemap![0x0000_0009];
    loom::model(|| {
        let reg = Arc::new(Bus(AtomicU32::new(0)));
        let lock = Arc::new(loom::sync::Mutex::new(()));
        let (other, other_lock) = (Arc::clone(&reg), Arc::clone(&lock));
        let handler = loom::thread::spawn(move || {
            let _guard = other_lock.lock().unwrap();
            unsafe { other.modify([(TE, 1)]) };
        });
        {
            let _guard = lock.lock().unwrap();
            unsafe { reg.modify([(UE, 1)]) };
        }
        handler.join().unwrap();
        statemap_put(states, unsafe { reg.load() });
    });
    statemap_check_exhaustive(states);
}
