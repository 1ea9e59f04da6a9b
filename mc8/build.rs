use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    println!("cargo:rerun-if-changed=build.rs");

    // phf_codegen for mnemonics
    let path = Path::new(&out_dir).join("mnemonic.rs");
    let mut file = BufWriter::new(File::create(&path).unwrap());

    write!(&mut file, "static MNEMONIC: phf::Map<&'static str, InstDesc> = ").unwrap();
    write!(
        &mut file,
        "{}",
        phf_codegen::Map::new()
            // ALU, operand is a register
            .entry("andi", "InstDesc{mnemonic: \"andi\", base: 0b0000_0000, encoder: Encoder::Reg}")
            .entry("nand", "InstDesc{mnemonic: \"nand\", base: 0b0000_1000, encoder: Encoder::Reg}")
            .entry("addi", "InstDesc{mnemonic: \"addi\", base: 0b0001_0000, encoder: Encoder::Reg}")
            .entry("subi", "InstDesc{mnemonic: \"subi\", base: 0b0001_1000, encoder: Encoder::Reg}")
            .entry("iori", "InstDesc{mnemonic: \"iori\", base: 0b0010_0000, encoder: Encoder::Reg}")
            .entry("xori", "InstDesc{mnemonic: \"xori\", base: 0b0010_1000, encoder: Encoder::Reg}")

            // Register moves
            .entry("dupi", "InstDesc{mnemonic: \"dupi\", base: 0b0011_0000, encoder: Encoder::Reg}")
            .entry("dupr", "InstDesc{mnemonic: \"dupr\", base: 0b0011_1000, encoder: Encoder::Reg}")

            // Memory
            .entry("load", "InstDesc{mnemonic: \"load\", base: 0b0100_0000, encoder: Encoder::Reg}")
            .entry("stor", "InstDesc{mnemonic: \"stor\", base: 0b0100_1000, encoder: Encoder::Reg}")

            .entry("shif", "InstDesc{mnemonic: \"shif\", base: 0b0101_0000, encoder: Encoder::Reg}")
            .entry("skip", "InstDesc{mnemonic: \"skip\", base: 0b0101_1000, encoder: Encoder::Reg}")

            // imm[3:0] into the low/high nibble of ireg
            .entry("stlo", "InstDesc{mnemonic: \"stlo\", base: 0b0110_0000, encoder: Encoder::Imm4}")
            .entry("sthi", "InstDesc{mnemonic: \"sthi\", base: 0b0111_0000, encoder: Encoder::Imm4}")

            // pc relative, imm[6:0]
            .entry("jump", "InstDesc{mnemonic: \"jump\", base: 0b1000_0000, encoder: Encoder::SImm7}")
            .build()
    )
    .unwrap();
    writeln!(&mut file, ";").unwrap();

    // phf_codegen for registers, canonical name + alias both map to the same code
    let path = Path::new(&out_dir).join("register.rs");
    let mut file = BufWriter::new(File::create(&path).unwrap());

    write!(&mut file, "static REGISTER: phf::Map<&'static str, Reg> = ").unwrap();
    write!(
        &mut file,
        "{}",
        phf_codegen::Map::new()
            .entry("000",  "Reg::IReg")
            .entry("ireg", "Reg::IReg")
            .entry("001",  "Reg::R1")
            .entry("r1",   "Reg::R1")
            .entry("010",  "Reg::R2")
            .entry("r2",   "Reg::R2")
            .entry("011",  "Reg::R3")
            .entry("r3",   "Reg::R3")
            .entry("100",  "Reg::R4")
            .entry("r4",   "Reg::R4")
            .entry("101",  "Reg::R5")
            .entry("r5",   "Reg::R5")
            .entry("110",  "Reg::R6")
            .entry("r6",   "Reg::R6")
            .entry("111",  "Reg::R7")
            .entry("r7",   "Reg::R7")
            .build()
    )
    .unwrap();
    writeln!(&mut file, ";").unwrap();
}
