#![cfg(any(feature = "stm32h533", feature = "stm32h7s3"))]

use drone_cmsis::reg::{self, Field};

#[cfg(feature = "stm32h533")]
mod stm32h533 {
    use super::*;
    use drone_cmsis::device::stm32h533 as device;
    use drone_cmsis::nvic::{self, InterruptNumber};

    #[test]
    fn vendor_addresses() {
        assert_eq!(reg::register!(device::RCC, CR).address(), 0x4402_0C00);
        assert_eq!(reg::register!(device::GPIOC, BSRR).address(), 0x4202_0818);
        assert_eq!(reg::register!(device::USART2, BRR).address(), 0x4000_440C);
        assert_eq!(reg::register!(device::FLASH, ACR).address(), 0x4002_2000);
    }

    #[test]
    fn baud_rate_divider_is_whole() {
        assert_eq!(reg::field!(device::USART1, BRR, BRR), Field::new(0, 0xFFFF));
        assert_eq!(reg::field!(device::USART6, BRR, BRR_4_15), Field::new(4, 0xFFF0));
    }

    #[test]
    fn peripheral_clock_source_alias() {
        assert_eq!(
            reg::field!(device::RCC, CCIPR5, CKPERSEL),
            reg::field!(device::RCC, CCIPR5, CKERPSEL)
        );
        assert_eq!(device::RCC_CCIPR5_CKPERSEL_MSK, 0xC000_0000);
    }

    #[test]
    fn data_and_request_fields() {
        assert_eq!(reg::field!(device::USART3, TDR, TDR), Field::new(0, 0x1FF));
        assert_eq!(reg::field!(device::USART3, RDR, RDR), Field::new(0, 0x1FF));
        assert_eq!(reg::field!(device::USART1, RQR, SBKRQ), Field::new(1, 0x2));
        assert_eq!(reg::field!(device::USART1, RQR, TXFRQ), Field::new(4, 0x10));
    }

    #[test]
    fn gpdma_channels_share_layout() {
        let en0 = reg::locator!(device::GPDMA1_Channel0, CCR, EN);
        let en5 = reg::locator!(device::GPDMA1_Channel5, CCR, EN);
        assert_eq!(en5.address() - en0.address(), 5 * device::GPDMA_CHANNEL_STRIDE);
        assert_eq!(en0.field(), en5.field());
        assert_eq!(
            reg::register!(device::GPDMA2_Channel7, CCR).address(),
            device::GPDMA2_CHANNEL0_BASE + 7 * device::GPDMA_CHANNEL_STRIDE + device::DMA_CCR_OFFSET
        );
    }

    #[test]
    fn interrupt_numbers() {
        assert_eq!(device::Interrupt::USART1.number(), 58);
        assert_eq!(device::Interrupt::GPDMA2_Channel0.number(), 90);
        let (register, field) = nvic::locate(nvic::NVIC_ISER, device::Interrupt::USART1);
        assert_eq!(register.address(), 0xE000_E104);
        assert_eq!(field, Field::bit(26));
        assert_eq!(nvic::priority(3, device::NVIC_PRIO_BITS), 0x30);
    }
}

#[cfg(feature = "stm32h7s3")]
mod stm32h7s3 {
    use super::*;
    use drone_cmsis::device::stm32h7s3 as device;
    use drone_cmsis::nvic::InterruptNumber;

    #[test]
    fn vendor_addresses() {
        assert_eq!(reg::register!(device::RCC, CR).address(), 0x5802_4400);
        assert_eq!(reg::register!(device::GPIOM, IDR).address(), 0x5802_3010);
        assert_eq!(reg::register!(device::USART1, TDR).address(), 0x4201_1028);
    }

    #[test]
    fn vendor_fields() {
        assert_eq!(reg::field!(device::RCC, CCIPR1, CKPERSEL), Field::new(28, 0x3000_0000));
        assert_eq!(reg::field!(device::USART2, RDR, RDR), Field::new(0, 0x1FF));
        assert_eq!(reg::field!(device::USART3, BRR, BRR), Field::new(0, 0xFFFF));
    }

    #[test]
    fn interrupt_numbers() {
        assert_eq!(device::Interrupt::PVD_PVM.number(), 0);
        assert_eq!(device::Interrupt::USART1.number(), 82);
        assert_eq!(device::Interrupt::FDCAN2_IT1.number(), 155);
    }
}
