macro_rules! assemble {
    ($instructions:ident {}) => ();
    // set CC %REG
    ($instructions:ident {set $cc:ident %$reg:ident ; $($rest:tt)*}) => {
        $instructions.push(AsmInstruction::SetCC(Condition::$cc, Operand::Reg(Register::$reg)));
        assemble!($instructions {$($rest)*});
    };
    // #IMM, %REG
    ($instructions:ident {$name:ident #$imm:expr, %$reg:ident ; $($rest:tt)*}) => {
        $instructions.push(AsmInstruction::$name(Operand::Imm($imm.to_string()), Operand::Reg(Register::$reg)));
        assemble!($instructions {$($rest)*});
    };
    // %REG, %REG
    ($instructions:ident {$name:ident %$reg1:ident, %$reg2:ident ; $($rest:tt)*}) => {
        $instructions.push(AsmInstruction::$name(Operand::Reg(Register::$reg1), Operand::Reg(Register::$reg2)));
        assemble!($instructions {$($rest)*});
    };
    // %REG
    ($instructions:ident {$name:ident %$reg:ident ; $($rest:tt)*}) => {
        $instructions.push(AsmInstruction::$name(Operand::Reg(Register::$reg)));
        assemble!($instructions {$($rest)*});
    };
    // exp, %REG, %REG
    ($instructions:ident {$name:ident $op:expr, %$reg_src:ident, %$reg_dst:ident ; $($rest:tt)*}) => {
        $instructions.push(AsmInstruction::$name($op, Operand::Reg(Register::$reg_src), Operand::Reg(Register::$reg_dst)));
        assemble!($instructions {$($rest)*});
    };
    // exp, %REG
    ($instructions:ident {$name:ident $arg:expr, %$reg:ident ; $($rest:tt)*}) => {
        $instructions.push(AsmInstruction::$name($arg, Operand::Reg(Register::$reg)));
        assemble!($instructions {$($rest)*});
    };
    ($instructions:ident {$name:ident ; $($rest:tt)*}) => {
        $instructions.push(AsmInstruction::$name);
        assemble!($instructions {$($rest)*});
    };
}
pub(super) use assemble;
