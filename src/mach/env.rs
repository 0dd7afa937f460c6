use std::collections::HashMap;
use std::rc::Rc;

/// Key `iread` stores its line under.
pub const INPUT_SLOT: &str = "_";

/// ## Variable memory
///
/// One flat string table for a whole run. Absent names read as the empty string.

#[derive(Debug, Default, Clone)]
pub struct Environment {
    vars: HashMap<Rc<str>, Rc<str>>,
}

impl Environment {
    pub fn new() -> Environment {
        Environment::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn fetch(&self, var_name: &str) -> Rc<str> {
        match self.vars.get(var_name) {
            Some(val) => val.clone(),
            None => "".into(),
        }
    }

    pub fn store(&mut self, var_name: &Rc<str>, value: Rc<str>) {
        match self.vars.get_mut(var_name) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(var_name.clone(), value);
            }
        }
    }
}
