//! STM32H7S3 register definitions.
//!
//! Vendor definitions live in [`vendor`], corrections in [`errata`]. This
//! module re-exports both, with the corrected entries taking precedence, so
//! it can be used as a register definition table path:
//!
//! ```no_run
//! use drone_cmsis::{device::stm32h7s3 as device, reg};
//!
//! unsafe { reg::set!(device::USART1, BRR, BRR = 0x0868) };
//! ```

pub mod errata;
pub mod vendor;

pub use self::vendor::*;
#[doc(no_inline)]
pub use self::errata::{
    USART_BRR_BRR_MSK,
    USART_BRR_BRR_POS,
};

use crate::nvic::InterruptNumber;

/// Number of implemented interrupt priority bits.
pub const NVIC_PRIO_BITS: u8 = 4;

/// Device interrupts, numbered from the first device interrupt.
#[allow(non_camel_case_types, missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u16)]
pub enum Interrupt {
    PVD_PVM = 0,
    DTS = 2,
    IWDG = 3,
    WWDG = 4,
    RCC = 5,
    FLASH = 8,
    RAMECC = 9,
    FPU = 10,
    TAMP = 13,
    EXTI0 = 16,
    EXTI1 = 17,
    EXTI2 = 18,
    EXTI3 = 19,
    EXTI4 = 20,
    EXTI5 = 21,
    EXTI6 = 22,
    EXTI7 = 23,
    EXTI8 = 24,
    EXTI9 = 25,
    EXTI10 = 26,
    EXTI11 = 27,
    EXTI12 = 28,
    EXTI13 = 29,
    EXTI14 = 30,
    EXTI15 = 31,
    RTC = 32,
    SAES = 33,
    CRYP = 34,
    PKA = 35,
    HASH = 36,
    RNG = 37,
    ADC1_2 = 38,
    GPDMA1_Channel0 = 39,
    GPDMA1_Channel1 = 40,
    GPDMA1_Channel2 = 41,
    GPDMA1_Channel3 = 42,
    GPDMA1_Channel4 = 43,
    GPDMA1_Channel5 = 44,
    GPDMA1_Channel6 = 45,
    GPDMA1_Channel7 = 46,
    TIM1_BRK = 47,
    TIM1_UP = 48,
    TIM1_TRG_COM = 49,
    TIM1_CC = 50,
    TIM2 = 51,
    TIM3 = 52,
    TIM4 = 53,
    TIM5 = 54,
    TIM6 = 55,
    TIM7 = 56,
    TIM9 = 57,
    SPI1 = 58,
    SPI2 = 59,
    SPI3 = 60,
    SPI4 = 61,
    SPI5 = 62,
    SPI6 = 63,
    HPDMA1_Channel0 = 64,
    HPDMA1_Channel1 = 65,
    HPDMA1_Channel2 = 66,
    HPDMA1_Channel3 = 67,
    HPDMA1_Channel4 = 68,
    HPDMA1_Channel5 = 69,
    HPDMA1_Channel6 = 70,
    HPDMA1_Channel7 = 71,
    SAI1_A = 72,
    SAI1_B = 73,
    SAI2_A = 74,
    SAI2_B = 75,
    I2C1_EV = 76,
    I2C1_ER = 77,
    I2C2_EV = 78,
    I2C2_ER = 79,
    I2C3_EV = 80,
    I2C3_ER = 81,
    USART1 = 82,
    USART2 = 83,
    USART3 = 84,
    UART4 = 85,
    UART5 = 86,
    UART7 = 87,
    UART8 = 88,
    I3C1_EV = 89,
    I3C1_ER = 90,
    OTG_HS = 91,
    ETH = 92,
    CORDIC = 93,
    GFXTIM = 94,
    DCMIPP = 95,
    DMA2D = 98,
    JPEG = 99,
    GFXMMU = 100,
    I3C1_WKUP = 101,
    MCE1 = 102,
    MCE2 = 103,
    MCE3 = 104,
    XSPI1 = 105,
    XSPI2 = 106,
    FMC = 107,
    SDMMC1 = 108,
    SDMMC2 = 109,
    OTG_FS = 112,
    TIM12 = 113,
    TIM13 = 114,
    TIM14 = 115,
    TIM15 = 116,
    TIM16 = 117,
    TIM17 = 118,
    LPTIM1 = 119,
    LPTIM2 = 120,
    LPTIM3 = 121,
    LPTIM4 = 122,
    LPTIM5 = 123,
    SPDIF_RX = 124,
    MDIOS = 125,
    ADF1_FLT0 = 126,
    CRS = 127,
    UCPD1 = 128,
    CEC = 129,
    PSSI = 130,
    LPUART1 = 131,
    WAKEUP_PIN = 132,
    GPDMA1_Channel8 = 133,
    GPDMA1_Channel9 = 134,
    GPDMA1_Channel10 = 135,
    GPDMA1_Channel11 = 136,
    GPDMA1_Channel12 = 137,
    GPDMA1_Channel13 = 138,
    GPDMA1_Channel14 = 139,
    GPDMA1_Channel15 = 140,
    HPDMA1_Channel8 = 141,
    HPDMA1_Channel9 = 142,
    HPDMA1_Channel10 = 143,
    HPDMA1_Channel11 = 144,
    HPDMA1_Channel12 = 145,
    HPDMA1_Channel13 = 146,
    HPDMA1_Channel14 = 147,
    HPDMA1_Channel15 = 148,
    FDCAN1_IT0 = 152,
    FDCAN1_IT1 = 153,
    FDCAN2_IT0 = 154,
    FDCAN2_IT1 = 155,
}

unsafe impl InterruptNumber for Interrupt {
    #[inline]
    fn number(self) -> u16 {
        self as u16
    }
}
