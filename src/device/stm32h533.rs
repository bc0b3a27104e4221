//! STM32H533 register definitions.
//!
//! Vendor definitions live in [`vendor`], corrections in [`errata`]. This
//! module re-exports both, with the corrected entries taking precedence, so
//! it can be used as a register definition table path:
//!
//! ```no_run
//! use drone_cmsis::{device::stm32h533 as device, reg};
//!
//! unsafe { reg::set!(device::USART1, BRR, BRR = 0x0868) };
//! ```

pub mod errata;
pub mod vendor;

pub use self::vendor::*;
#[doc(no_inline)]
pub use self::errata::{
    RCC_CCIPR5_CKPERSEL_MSK,
    RCC_CCIPR5_CKPERSEL_POS,
    USART_BRR_BRR_MSK,
    USART_BRR_BRR_POS,
    USART_RDR_RDR_MSK,
    USART_RDR_RDR_POS,
    USART_RQR_ABRRQ_MSK,
    USART_RQR_ABRRQ_POS,
    USART_RQR_MMRQ_MSK,
    USART_RQR_MMRQ_POS,
    USART_RQR_RXFRQ_MSK,
    USART_RQR_RXFRQ_POS,
    USART_RQR_SBKRQ_MSK,
    USART_RQR_SBKRQ_POS,
    USART_RQR_TXFRQ_MSK,
    USART_RQR_TXFRQ_POS,
    USART_TDR_TDR_MSK,
    USART_TDR_TDR_POS,
};

use crate::nvic::InterruptNumber;

/// Number of implemented interrupt priority bits.
pub const NVIC_PRIO_BITS: u8 = 4;

/// Distance between consecutive GPDMA channel register blocks.
pub const GPDMA_CHANNEL_STRIDE: usize = 0x80;

/// Device interrupts, numbered from the first device interrupt.
#[allow(non_camel_case_types, missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u16)]
pub enum Interrupt {
    WWDG = 0,
    PVD_AVD = 1,
    RTC = 2,
    RTC_S = 3,
    TAMP = 4,
    RAMCFG = 5,
    FLASH = 6,
    FLASH_S = 7,
    GTZC = 8,
    RCC = 9,
    RCC_S = 10,
    EXTI0 = 11,
    EXTI1 = 12,
    EXTI2 = 13,
    EXTI3 = 14,
    EXTI4 = 15,
    EXTI5 = 16,
    EXTI6 = 17,
    EXTI7 = 18,
    EXTI8 = 19,
    EXTI9 = 20,
    EXTI10 = 21,
    EXTI11 = 22,
    EXTI12 = 23,
    EXTI13 = 24,
    EXTI14 = 25,
    EXTI15 = 26,
    GPDMA1_Channel0 = 27,
    GPDMA1_Channel1 = 28,
    GPDMA1_Channel2 = 29,
    GPDMA1_Channel3 = 30,
    GPDMA1_Channel4 = 31,
    GPDMA1_Channel5 = 32,
    GPDMA1_Channel6 = 33,
    GPDMA1_Channel7 = 34,
    IWDG = 35,
    SAES = 36,
    ADC1 = 37,
    DAC1 = 38,
    FDCAN1_IT0 = 39,
    FDCAN1_IT1 = 40,
    TIM1_BRK = 41,
    TIM1_UP = 42,
    TIM1_TRG_COM = 43,
    TIM1_CC = 44,
    TIM2 = 45,
    TIM3 = 46,
    TIM4 = 47,
    TIM5 = 48,
    TIM6 = 49,
    TIM7 = 50,
    I2C1_EV = 51,
    I2C1_ER = 52,
    I2C2_EV = 53,
    I2C2_ER = 54,
    SPI1 = 55,
    SPI2 = 56,
    SPI3 = 57,
    USART1 = 58,
    USART2 = 59,
    USART3 = 60,
    UART4 = 61,
    UART5 = 62,
    LPUART1 = 63,
    LPTIM1 = 64,
    TIM8_BRK = 65,
    TIM8_UP = 66,
    TIM8_TRG_COM = 67,
    TIM8_CC = 68,
    ADC2 = 69,
    LPTIM2 = 70,
    TIM15 = 71,
    USB_DRD_FS = 74,
    CRS = 75,
    UCPD1 = 76,
    FMC = 77,
    OCTOSPI1 = 78,
    SDMMC1 = 79,
    I2C3_EV = 80,
    I2C3_ER = 81,
    SPI4 = 82,
    USART6 = 85,
    GPDMA2_Channel0 = 90,
    GPDMA2_Channel1 = 91,
    GPDMA2_Channel2 = 92,
    GPDMA2_Channel3 = 93,
    GPDMA2_Channel4 = 94,
    GPDMA2_Channel5 = 95,
    GPDMA2_Channel6 = 96,
    GPDMA2_Channel7 = 97,
    FPU = 103,
    ICACHE = 104,
    DCACHE1 = 105,
    DCMI_PSSI = 108,
    FDCAN2_IT0 = 109,
    FDCAN2_IT1 = 110,
    DTS = 113,
    RNG = 114,
    OTFDEC1 = 115,
    AES = 116,
    HASH = 117,
    PKA = 118,
    CEC = 119,
    TIM12 = 120,
    I3C1_EV = 123,
    I3C1_ER = 124,
    I3C2_EV = 131,
    I3C2_ER = 132,
}

unsafe impl InterruptNumber for Interrupt {
    #[inline]
    fn number(self) -> u16 {
        self as u16
    }
}
