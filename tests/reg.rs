#![allow(non_snake_case)]

use drone_cmsis::reg::{self, combine, Field, RReg, Reg, RwReg, WReg};
use std::cell::Cell;
use std::ptr::{read_volatile, write_volatile};

drone_cmsis::table! {
    /// Test serial block.
    USART {
        /// Control register 1.
        CR1 0x00 {
            UE 0 0x0000_0001;
            RE 2 0x0000_0004;
            TE 3 0x0000_0008;
            M0 12 0x0000_1000;
            OVER8 15 0x0000_8000;
            M1 28 0x1000_0000;
        }
        BRR 0x0C {
            BRR 0 0x0000_FFFF;
        }
        ISR 0x1C {
            TXE 7 0x0000_0080;
            TEACK 21 0x0020_0000;
            REACK 22 0x0040_0000;
        }
    }
    RCC {
        CFGR1 0x1C {
            SW 0 0x0000_0007;
            SWS 3 0x0000_0038;
        }
        CCIPR1 0x24 {
            USART1SEL 0 0x0000_0007;
            USART2SEL 3 0x0000_0038;
            SPI1SEL 24 0x0700_0000;
        }
    }
}

drone_cmsis::table! {
    #[cfg(all())]
    PWR {
        VOSCR 0x10 {
            VOS 4 0x0000_0030;
        }
    }
    #[cfg(any())]
    PWR {
        VOSCR 0x14 {
            VOS 0 0x0000_0003;
        }
    }
}

/// Number of words in a test register block.
const BLOCK_WORDS: usize = 16;

/// Word-addressed memory standing in for a peripheral register block.
struct Block(Box<[u32; BLOCK_WORDS]>);

impl Block {
    fn new(fill: u32) -> Self {
        Self(Box::new([fill; BLOCK_WORDS]))
    }

    fn base(&mut self) -> usize {
        self.0.as_mut_ptr() as usize
    }

    fn word(&self, offset: usize) -> u32 {
        assert!(offset / 4 < BLOCK_WORDS);
        unsafe { read_volatile(self.0.as_ptr().add(offset / 4)) }
    }

    fn set_word(&mut self, offset: usize, value: u32) {
        assert!(offset / 4 < BLOCK_WORDS);
        unsafe { write_volatile(self.0.as_mut_ptr().add(offset / 4), value) };
    }
}

#[test]
fn registers_fit_block() {
    for offset in [
        USART_CR1_OFFSET,
        USART_BRR_OFFSET,
        USART_ISR_OFFSET,
        RCC_CFGR1_OFFSET,
        RCC_CCIPR1_OFFSET,
    ] {
        assert!(offset / 4 < BLOCK_WORDS);
    }
}

#[test]
fn family_attributes_apply_to_constants() {
    assert_eq!(PWR_VOSCR_OFFSET, 0x10);
    assert_eq!(reg::field!(PWR, VOSCR, VOS), Field::new(4, 0x30));
}

#[test]
fn set_from_zero() {
    let mut block = Block::new(0);
    let USART1_BASE = block.base();
    unsafe { reg::set!(USART1, CR1, UE = 1, RE = 1, TE = 1) };
    assert_eq!(block.word(USART_CR1_OFFSET), 0x0000_000D);
}

#[test]
fn set_preserves_untouched_bits() {
    let mut block = Block::new(0xFFFF_FFFF);
    let USART1_BASE = block.base();
    unsafe { reg::set!(USART1, CR1, OVER8 = 0, M1 = 0) };
    assert_eq!(block.word(USART_CR1_OFFSET), 0xEFFF_7FFF);
    assert_eq!(block.word(USART_BRR_OFFSET), 0xFFFF_FFFF);
}

#[test]
fn set_multi_bit_fields() {
    let mut block = Block::new(0);
    let RCC_BASE = block.base();
    block.set_word(RCC_CCIPR1_OFFSET, 0x0500_003F);
    unsafe { reg::set!(RCC, CCIPR1, USART1SEL = 2, USART2SEL = 0, SPI1SEL = 1) };
    assert_eq!(block.word(RCC_CCIPR1_OFFSET), 0x0100_0002);
}

#[test]
fn set_order_independent() {
    let mut a = Block::new(0xA5A5_A5A5);
    let mut b = Block::new(0xA5A5_A5A5);
    let USART1_BASE = a.base();
    let USART2_BASE = b.base();
    unsafe {
        reg::set!(USART1, CR1, UE = 0, M0 = 1, OVER8 = 1, TE = 0);
        reg::set!(USART2, CR1, TE = 0, OVER8 = 1, M0 = 1, UE = 0);
    }
    assert_eq!(a.word(USART_CR1_OFFSET), b.word(USART_CR1_OFFSET));
}

#[test]
fn set_discards_overflowing_value() {
    let mut block = Block::new(0);
    let RCC_BASE = block.base();
    unsafe { reg::set!(RCC, CFGR1, SW = 0xFF) };
    assert_eq!(block.word(RCC_CFGR1_OFFSET), 0x0000_0007);
}

#[test]
fn set_without_fields_writes_back() {
    let mut block = Block::new(0x1234_5678);
    let USART1_BASE = block.base();
    unsafe { reg::set!(USART1, CR1) };
    assert_eq!(block.word(USART_CR1_OFFSET), 0x1234_5678);
}

#[test]
fn set_trailing_comma() {
    let mut block = Block::new(0);
    let USART1_BASE = block.base();
    unsafe { reg::set!(USART1, BRR, BRR = 0x0868,) };
    assert_eq!(block.word(USART_BRR_OFFSET), 0x0868);
}

#[test]
fn get_reads_back() {
    let mut block = Block::new(0);
    let RCC_BASE = block.base();
    unsafe {
        reg::set!(RCC, CCIPR1, USART2SEL = 5);
        assert_eq!(reg::get!(RCC, CCIPR1, USART2SEL), 5);
        assert_eq!(reg::get!(RCC, CCIPR1, USART1SEL), 0);
    }
}

#[test]
fn get_from_value() {
    assert_eq!(reg::get_from!(0x0000_0018, RCC, CFGR1, SWS), 3);
    assert_eq!(reg::get_from!(0xFFFF_FFC7, RCC, CFGR1, SWS), 0);
}

#[test]
fn instances_share_fields() {
    let mut block1 = Block::new(0);
    let mut block6 = Block::new(0);
    let USART1_BASE = block1.base();
    let USART6_BASE = block6.base();
    unsafe {
        reg::set!(USART1, CR1, UE = 1);
        reg::set!(USART6, CR1, TE = 1);
    }
    assert_eq!(block1.word(USART_CR1_OFFSET), 0x1);
    assert_eq!(block6.word(USART_CR1_OFFSET), 0x8);
    assert_eq!(reg::field!(USART1, CR1, TE), reg::field!(USART6, CR1, TE));
}

#[test]
fn names_are_case_insensitive() {
    assert_eq!(reg::field!(usart2, cr1, over8), Field::new(15, 0x8000));
    assert_eq!(reg::field!(Rcc, Cfgr1, Sws), Field::new(RCC_CFGR1_SWS_POS, RCC_CFGR1_SWS_MSK));
}

#[test]
fn register_binding() {
    let mut block = Block::new(0);
    let USART3_BASE = block.base();
    let brr = reg::register!(USART3, BRR);
    assert_eq!(brr.address(), USART3_BASE + USART_BRR_OFFSET);
    unsafe { brr.store(0x1A1) };
    assert_eq!(block.word(USART_BRR_OFFSET), 0x1A1);
}

#[test]
fn update_local_value() {
    let mut cr1 = 0xFFFF_FFFF_u32;
    reg::update!(cr1, USART1, CR1, UE = 0, M0 = 0);
    assert_eq!(cr1, 0xFFFF_EFFE);
    let mut values = [0_u32; 2];
    reg::update!(values[1], RCC, CFGR1, SW = 3);
    assert_eq!(values, [0, 3]);
}

#[test]
fn wait_returns_when_set() {
    let mut block = Block::new(0);
    let USART1_BASE = block.base();
    block.set_word(USART_ISR_OFFSET, 0x0060_0000);
    unsafe { reg::wait!(USART1, ISR, TEACK = 1, REACK = 1) };
    unsafe { reg::wait!(USART1, ISR, TXE = 0) };
}

#[test]
fn combine_matches_set() {
    let mut block = Block::new(0x8000_1234);
    let USART1_BASE = block.base();
    unsafe { reg::set!(USART1, CR1, UE = 1, OVER8 = 0) };
    let expected = combine(
        0x8000_1234,
        [(reg::field!(USART1, CR1, UE), 1), (reg::field!(USART1, CR1, OVER8), 0)],
    );
    assert_eq!(block.word(USART_CR1_OFFSET), expected);
}

/// Register counting its bus accesses.
struct Counting {
    value: Cell<u32>,
    loads: Cell<usize>,
    stores: Cell<usize>,
}

impl Counting {
    fn new(value: u32) -> Self {
        Self { value: Cell::new(value), loads: Cell::new(0), stores: Cell::new(0) }
    }
}

impl Reg for Counting {
    type Raw = u32;
}

impl RReg for Counting {
    unsafe fn load(&self) -> u32 {
        self.loads.set(self.loads.get() + 1);
        self.value.get()
    }
}

impl WReg for Counting {
    unsafe fn store(&self, raw: u32) {
        self.stores.set(self.stores.get() + 1);
        self.value.set(raw);
    }
}

#[test]
fn modify_single_load_and_store() {
    let fields = [
        Field::new(0, 0x1),
        Field::new(1, 0x2),
        Field::new(2, 0xC),
        Field::new(4, 0xF0),
        Field::new(8, 0xFF00),
        Field::new(16, 0xFFFF_0000),
    ];
    let reg = Counting::new(0xFFFF_FFFF);
    unsafe { reg.modify([]) };
    unsafe { reg.modify([(fields[0], 0)]) };
    unsafe { reg.modify([(fields[1], 0), (fields[2], 0)]) };
    unsafe { reg.modify(fields.map(|field| (field, 0))) };
    assert_eq!(reg.loads.get(), 4);
    assert_eq!(reg.stores.get(), 4);
    assert_eq!(reg.value.get(), 0);
}

#[test]
fn modify_keeps_bits_outside_masks() {
    let reg = Counting::new(0xFFFF_FFFF);
    unsafe { reg.modify([(Field::new(0, 0x3), 0), (Field::new(4, 0xF0), 0)]) };
    assert_eq!(reg.value.get(), 0xFFFF_FF0C);
    assert_eq!((reg.loads.get(), reg.stores.get()), (1, 1));
}

/// Register whose value is changed by a simulated interrupt handler right
/// after the first load.
struct Preempted {
    value: Cell<u32>,
    handler: Cell<Option<fn(u32) -> u32>>,
}

impl Reg for Preempted {
    type Raw = u32;
}

impl RReg for Preempted {
    unsafe fn load(&self) -> u32 {
        let raw = self.value.get();
        if let Some(handler) = self.handler.take() {
            self.value.set(handler(raw));
        }
        raw
    }
}

impl WReg for Preempted {
    unsafe fn store(&self, raw: u32) {
        self.value.set(raw);
    }
}

fn set_txe(raw: u32) -> u32 {
    raw | 0x8
}

#[test]
fn preemption_between_load_and_store_loses_update() {
    let handler = Cell::new(Some(set_txe as fn(u32) -> u32));
    let reg = Preempted { value: Cell::new(0), handler };
    unsafe { reg.modify([(Field::new(0, 0x1), 1)]) };
    assert_eq!(reg.value.get(), 0x1);
    unsafe { reg.modify([(Field::new(3, 0x8), 1)]) };
    assert_eq!(reg.value.get(), 0x9);
}
