#![no_main]
#[macro_use]
extern crate libfuzzer_sys;

use mc8::asm::{self, AsmConfig};

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        // Errors are fine, panics are not
        if let Ok(code) = asm::assemble(source, &AsmConfig::default()) {
            // Every emitted byte must list back as something the assembler accepts
            for (_, byte, inst) in mc8::dis::disassemble(&code) {
                let text = inst.to_string();
                let again = asm::assemble(&text, &AsmConfig::default()).unwrap();
                assert_eq!(vec![byte], again);
            }
        }
    }
});
