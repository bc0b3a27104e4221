use lazy_static::lazy_static;
use std::collections::HashMap;

/// Peripheral kinds whose instances carry a decimal suffix: `(kind, family,
/// instances count)`.
const NUMBERED: &[(&str, &str, u32)] = &[
    ("UART", "UART", 8),
    ("USART", "USART", 8),
    ("SPI", "SPI", 8),
    ("XSPI", "XSPI", 8),
    ("I2C", "I2C", 8),
    ("I3C", "I3C", 8),
    ("DMA", "DMA", 8),
    ("DMAMUX", "DMAMUX", 8),
    ("GPDMA", "DMA", 8),
    ("SDMMC", "SDMMC", 8),
    ("TIM", "TIM", 32),
    ("ADC", "ADC", 5),
];

/// Sub-blocks repeated inside numbered instances: `(kind, block, family,
/// blocks count)`. Instance names look like `DMA1_Stream3`.
const NESTED: &[(&str, &str, &str, u32)] = &[
    ("DMA", "STREAM", "DMA", 8),
    ("DMAMUX", "CHANNEL", "DMAMUX", 8),
    ("DMAMUX", "REQUESTGENERATOR", "DMAMUX", 8),
    ("GPDMA", "CHANNEL", "DMA", 8),
];

/// Instances whose suffix is a port letter.
const LETTERED: &[(&str, &str)] = &[("GPIO", "GPIO")];

const EXPLICIT: &[(&str, &str)] = &[("ADC12_COMMON", "ADC")];

/// Number of instances the nested sub-blocks are expanded for.
const NESTED_INSTANCES: u32 = 8;

lazy_static! {
    static ref ALIASES: HashMap<String, &'static str> = build();
}

fn build() -> HashMap<String, &'static str> {
    let mut aliases = HashMap::new();
    for &(kind, family, count) in NUMBERED {
        for index in 0..count {
            aliases.insert(format!("{kind}{index}"), family);
        }
    }
    for &(kind, block, family, count) in NESTED {
        for index in 0..NESTED_INSTANCES {
            for sub in 0..count {
                aliases.insert(format!("{kind}{index}_{block}{sub}"), family);
            }
        }
    }
    for &(kind, family) in LETTERED {
        for letter in 'A'..='Z' {
            aliases.insert(format!("{kind}{letter}"), family);
        }
    }
    for &(instance, family) in EXPLICIT {
        aliases.insert(instance.to_owned(), family);
    }
    aliases
}

/// Resolves an instance-qualified peripheral name to its register family.
///
/// The lookup is case-insensitive. Names missing from the alias table are
/// treated as already canonical and returned upper-cased.
///
/// ```
/// use drone_cmsis_macros_core::canonicalize;
///
/// assert_eq!(canonicalize("USART3"), "USART");
/// assert_eq!(canonicalize("GPDMA1_Channel7"), "DMA");
/// assert_eq!(canonicalize("rcc"), "RCC");
/// ```
pub fn canonicalize(name: &str) -> String {
    let name = name.to_uppercase();
    match ALIASES.get(&name) {
        Some(family) => (*family).to_owned(),
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_instances() {
        assert_eq!(canonicalize("USART1"), "USART");
        assert_eq!(canonicalize("USART7"), "USART");
        assert_eq!(canonicalize("UART4"), "UART");
        assert_eq!(canonicalize("SPI0"), "SPI");
        assert_eq!(canonicalize("I2C3"), "I2C");
        assert_eq!(canonicalize("I3C1"), "I3C");
        assert_eq!(canonicalize("XSPI2"), "XSPI");
        assert_eq!(canonicalize("SDMMC1"), "SDMMC");
        assert_eq!(canonicalize("TIM31"), "TIM");
        assert_eq!(canonicalize("ADC4"), "ADC");
    }

    #[test]
    fn numbered_out_of_range() {
        assert_eq!(canonicalize("USART8"), "USART8");
        assert_eq!(canonicalize("TIM32"), "TIM32");
        assert_eq!(canonicalize("ADC5"), "ADC5");
    }

    #[test]
    fn dma_blocks() {
        assert_eq!(canonicalize("DMA2"), "DMA");
        assert_eq!(canonicalize("DMA1_Stream0"), "DMA");
        assert_eq!(canonicalize("DMA7_Stream7"), "DMA");
        assert_eq!(canonicalize("GPDMA1"), "DMA");
        assert_eq!(canonicalize("GPDMA2_Channel5"), "DMA");
        assert_eq!(canonicalize("DMAMUX1"), "DMAMUX");
        assert_eq!(canonicalize("DMAMUX1_Channel3"), "DMAMUX");
        assert_eq!(canonicalize("DMAMUX1_RequestGenerator2"), "DMAMUX");
        assert_eq!(canonicalize("DMA1_Stream8"), "DMA1_STREAM8");
    }

    #[test]
    fn gpio_ports() {
        assert_eq!(canonicalize("GPIOA"), "GPIO");
        assert_eq!(canonicalize("GPIOH"), "GPIO");
        assert_eq!(canonicalize("GPIOZ"), "GPIO");
        assert_eq!(canonicalize("gpioc"), "GPIO");
    }

    #[test]
    fn explicit_entries() {
        assert_eq!(canonicalize("ADC12_COMMON"), "ADC");
    }

    #[test]
    fn identity_for_single_instances() {
        assert_eq!(canonicalize("RCC"), "RCC");
        assert_eq!(canonicalize("Flash"), "FLASH");
        assert_eq!(canonicalize("PWR"), "PWR");
    }
}
