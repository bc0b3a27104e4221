#![allow(non_snake_case)]

use drone_cmsis::reg::{self, Field, Locator};
use std::ptr::read_volatile;

drone_cmsis::table! {
    DMA {
        CCR 0x50 {
            EN 0 0x0000_0001;
            PRIO 22 0x00C0_0000;
        }
    }
}

const CHANNEL_STRIDE: usize = 0x80;
const CHANNELS: usize = 4;

fn word(memory: &[u32], address: usize) -> u32 {
    let index = (address - memory.as_ptr() as usize) / 4;
    unsafe { read_volatile(memory.as_ptr().add(index)) }
}

#[test]
fn put_matches_set() {
    let mut a = vec![0xFFFF_FFFE_u32; 64];
    let mut b = vec![0xFFFF_FFFE_u32; 64];
    let GPDMA1_CHANNEL0_BASE = a.as_mut_ptr() as usize;
    let GPDMA2_CHANNEL0_BASE = b.as_mut_ptr() as usize;
    unsafe { reg::set!(GPDMA1_Channel0, CCR, PRIO = 1) };
    let prio = reg::locator!(GPDMA2_Channel0, CCR, PRIO);
    unsafe { prio.put(1) };
    let address = GPDMA1_CHANNEL0_BASE + DMA_CCR_OFFSET;
    assert_eq!(word(&a, address), 0xFF7F_FFFE);
    assert_eq!(word(&a, address), word(&b, prio.address()));
    assert_eq!(unsafe { prio.get() }, 1);
}

#[test]
fn runtime_channel_selection() {
    let mut memory = vec![0_u32; CHANNELS * CHANNEL_STRIDE / 4 + 32];
    let channel0 = memory.as_mut_ptr() as usize + DMA_CCR_OFFSET;
    let en = Field::new(DMA_CCR_EN_POS, DMA_CCR_EN_MSK);
    let enable = |index: usize| {
        let locator = Locator::new(channel0 + CHANNEL_STRIDE * index, en);
        unsafe { locator.put(1) };
    };
    enable(2);
    enable(0);
    let states = (0..CHANNELS)
        .map(|index| word(&memory, channel0 + CHANNEL_STRIDE * index))
        .collect::<Vec<_>>();
    assert_eq!(states, [1, 0, 1, 0]);
}

#[test]
fn parts() {
    let locator = Locator::new(0x4002_0050, Field::new(22, 0x00C0_0000_u32));
    assert_eq!(locator.register().address(), 0x4002_0050);
    assert_eq!(locator.field(), Field::new(22, 0x00C0_0000));
    let GPDMA1_CHANNEL1_BASE = 0x4002_0000;
    assert_eq!(reg::locator!(GPDMA1_Channel1, CCR, PRIO), locator);
}
