/*!
# Statements
*/

#[path = "statements/def.rs"]
#[allow(non_snake_case)]
pub mod DEF;

#[path = "statements/iread.rs"]
#[allow(non_snake_case)]
pub mod IREAD;

#[path = "statements/let.rs"]
#[allow(non_snake_case)]
pub mod LET;

#[path = "statements/print.rs"]
#[allow(non_snake_case)]
pub mod PRINT;

#[path = "statements/return.rs"]
#[allow(non_snake_case)]
pub mod RETURN;

#[path = "statements/unsafe.rs"]
#[allow(non_snake_case)]
pub mod UNSAFE_ASM;
