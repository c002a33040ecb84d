use std::str::FromStr;


#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Directive { Db, Spr }

impl FromStr for Directive {
    type Err = ParseDirectiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ".db"   => Ok(Directive::Db),
            ".spr"  => Ok(Directive::Spr),
            _       => Err(ParseDirectiveError { _priv: () }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectiveError { _priv: () }


// General purpose registers, vf doubles as the carry/collision flag
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Reg {
    V0, V1, V2, V3, V4, V5, V6, V7,
    V8, V9, VA, VB, VC, VD, VE, VF,
}

impl From<Reg> for u16 {
    fn from(original: Reg) -> u16 {
        match original {
            Reg::V0 => 0x0,
            Reg::V1 => 0x1,
            Reg::V2 => 0x2,
            Reg::V3 => 0x3,
            Reg::V4 => 0x4,
            Reg::V5 => 0x5,
            Reg::V6 => 0x6,
            Reg::V7 => 0x7,
            Reg::V8 => 0x8,
            Reg::V9 => 0x9,
            Reg::VA => 0xA,
            Reg::VB => 0xB,
            Reg::VC => 0xC,
            Reg::VD => 0xD,
            Reg::VE => 0xE,
            Reg::VF => 0xF,
        }
    }
}

// Lines are lowercased before they get here
impl FromStr for Reg {
    type Err = ParseRegError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "v0" => Ok(Reg::V0),
            "v1" => Ok(Reg::V1),
            "v2" => Ok(Reg::V2),
            "v3" => Ok(Reg::V3),
            "v4" => Ok(Reg::V4),
            "v5" => Ok(Reg::V5),
            "v6" => Ok(Reg::V6),
            "v7" => Ok(Reg::V7),
            "v8" => Ok(Reg::V8),
            "v9" => Ok(Reg::V9),
            "va" => Ok(Reg::VA),
            "vb" => Ok(Reg::VB),
            "vc" => Ok(Reg::VC),
            "vd" => Ok(Reg::VD),
            "ve" => Ok(Reg::VE),
            "vf" => Ok(Reg::VF),
            _    => Err(ParseRegError { _priv: () }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRegError { _priv: () }


#[cfg(test)]
mod ast_parse {
    use super::*;

    #[test]
    fn test_all_registers() {
        for idx in 0..16u16 {
            let name = format!("v{:x}", idx);
            let reg = Reg::from_str(&name).unwrap();
            assert_eq!(u16::from(reg), idx);
        }
    }

    #[test]
    fn test_bad_registers() {
        for name in ["vg", "v", "v10", "x0", "V0", " v0", ""] {
            assert!(Reg::from_str(name).is_err(), "{:?} parsed as a register", name);
        }
    }

    #[test]
    fn test_directives() {
        assert_eq!(Directive::from_str(".db"), Ok(Directive::Db));
        assert_eq!(Directive::from_str(".spr"), Ok(Directive::Spr));
        assert!(Directive::from_str(".loop:").is_err());
        assert!(Directive::from_str("db").is_err());
    }
}
