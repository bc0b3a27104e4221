//! Corrections to the STM32H7S3 vendor register definitions.

/// Full baud rate divider. The vendor splits it into `BRR_0_3` and
/// `BRR_4_15`.
pub const USART_BRR_BRR_POS: u32 = 0;
/// Full baud rate divider.
pub const USART_BRR_BRR_MSK: u32 = 0xFFFF << USART_BRR_BRR_POS;
