//! Integration tests for disassemble functionality.

#[cfg(test)]
mod integration_tests {
    use std::{env, fs};

    use minievm_disassembler::{disassemble, DisassemblerArgs, DisassemblerArgsBuilder, Error};

    #[test]
    fn test_disassemble_nominal() {
        minievm_tracing::init_test_tracing();
        let bytecode = "600260030160201b5f5250";
        let expected = String::from("000000 PUSH1 02\n000002 PUSH1 03\n000004 ADD \n000005 PUSH1 20\n000007 SHL \n000008 PUSH0 \n000009 MSTORE \n00000a POP \n");

        let assembly = disassemble(DisassemblerArgs {
            target: bytecode.to_owned(),
            decimal_counter: false,
        })
        .expect("failed to disassemble");

        assert_eq!(expected, assembly);
    }

    #[test]
    fn test_disassemble_decimal_counter_nominal() {
        let bytecode = "0x6002600301610100600052";
        let expected = String::from(
            "0 PUSH1 02\n2 PUSH1 03\n4 ADD \n5 PUSH2 0100\n8 PUSH1 00\n10 MSTORE \n",
        );

        let assembly = disassemble(DisassemblerArgs {
            target: bytecode.to_owned(),
            decimal_counter: true,
        })
        .expect("failed to disassemble");

        assert_eq!(expected, assembly);
    }

    #[test]
    fn test_disassemble_unknown_opcodes() {
        let assembly = disassemble(
            DisassemblerArgsBuilder::new()
                .target("fe0056".to_string())
                .build()
                .expect("failed to build args"),
        )
        .expect("failed to disassemble");

        assert_eq!(assembly, "000000 unknown \n000001 unknown \n000002 unknown \n");
    }

    #[test]
    fn test_disassemble_truncated_push() {
        let assembly = disassemble(
            DisassemblerArgsBuilder::new()
                .target("600163aabb".to_string())
                .build()
                .expect("failed to build args"),
        )
        .expect("failed to disassemble");

        assert_eq!(assembly, "000000 PUSH1 01\n000002 PUSH4 aabb\n");
    }

    #[test]
    fn test_disassemble_push32() {
        let word = "ff".repeat(32);
        let assembly = disassemble(
            DisassemblerArgsBuilder::new()
                .target(format!("7f{word}01"))
                .decimal_counter(true)
                .build()
                .expect("failed to build args"),
        )
        .expect("failed to disassemble");

        assert_eq!(assembly, format!("0 PUSH32 {word}\n33 ADD \n"));
    }

    #[test]
    fn test_disassemble_empty() {
        let assembly = disassemble(
            DisassemblerArgsBuilder::new().target("0x".to_string()).build().expect("bad args"),
        )
        .expect("failed to disassemble");

        assert!(assembly.is_empty());
    }

    #[test]
    fn test_disassemble_from_file() {
        let path = env::temp_dir().join("minievm-disassemble-target.hex");
        fs::write(&path, "0x600150\n").expect("failed to write target");

        let assembly = disassemble(
            DisassemblerArgsBuilder::new()
                .target(path.to_string_lossy().into_owned())
                .build()
                .expect("failed to build args"),
        )
        .expect("failed to disassemble");

        assert_eq!(assembly, "000000 PUSH1 01\n000002 POP \n");
        fs::remove_file(path).expect("failed to remove target");
    }

    #[test]
    fn test_disassemble_bad_target() {
        let result = disassemble(
            DisassemblerArgsBuilder::new()
                .target("/nonexistent/target.hex".to_string())
                .build()
                .expect("failed to build args"),
        );

        assert!(matches!(result, Err(Error::FetchError(_))));
    }
}
