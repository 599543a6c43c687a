//! Parameter Sets

use crate::pbrt::*;
use crate::spectrum::*;
use std::cell::Cell;
use std::collections::HashMap;
use std::fmt;

mod texture_params;

// Re-export
pub use texture_params::*;

/// Stores the values of a named parameter and whether it was ever read.
#[derive(Clone, Debug, PartialEq)]
pub struct ParamSetItem<T> {
    /// The values.
    pub values: Vec<T>,

    /// Set when the parameter is looked up.
    looked_up: Cell<bool>,
}

impl<T> ParamSetItem<T> {
    /// Create a new `ParamSetItem`.
    ///
    /// * `values` - The values.
    pub fn new(values: Vec<T>) -> Self {
        Self {
            values,
            looked_up: Cell::new(false),
        }
    }

    /// Returns whether the parameter was read.
    pub fn looked_up(&self) -> bool {
        self.looked_up.get()
    }

    fn mark_looked_up(&self) {
        self.looked_up.set(true);
    }
}

/// A hashmap of parameter set items stored by name.
pub type ParamSetMap<T> = HashMap<String, ParamSetItem<T>>;

/// Stores parameter set items of different types in hashmaps.
#[derive(Clone, Debug)]
pub struct ParamSet {
    pub bools: ParamSetMap<bool>,
    pub ints: ParamSetMap<Int>,
    pub floats: ParamSetMap<Float>,
    pub spectra: ParamSetMap<Spectrum>,
    pub strings: ParamSetMap<String>,
    pub textures: ParamSetMap<String>,
}

/// Define a macro that can be used to generate a function for adding/replacing
/// parameter set item.
macro_rules! paramset_add {
    ($func: ident, $t: ty, $paramset: ident) => {
        pub fn $func(&mut self, name: &str, values: &[$t]) {
            self.$paramset
                .insert(String::from(name), ParamSetItem::new(values.to_vec()));
        }
    };
}

/// Define a macro that can be used to generate a function for removing
/// parameter set item.
macro_rules! paramset_erase {
    ($func: ident, $paramset: ident) => {
        pub fn $func(&mut self, name: &str) -> bool {
            self.$paramset.remove(name).is_some()
        }
    };
}

/// Define a macro that can be used to generate a function for finding
/// parameter set item that is stored as a single item. When more than one
/// value was supplied the first one is used.
macro_rules! paramset_find_one {
    ($func: ident, $t: ty, $paramset: ident) => {
        pub fn $func(&self, name: &str) -> Option<$t> {
            let param = self.$paramset.get(name)?;
            param.mark_looked_up();
            if param.values.len() > 1 {
                warn!(
                    "Parameter '{}' has {} values; only the first is used.",
                    name,
                    param.values.len()
                );
            }
            param.values.first().cloned()
        }
    };
}

/// Define a macro that can be used to generate a function for finding
/// parameter set item that is stored as a list.
macro_rules! paramset_find {
    ($func: ident, $t: ty, $paramset: ident) => {
        pub fn $func(&self, name: &str) -> Vec<$t> {
            match self.$paramset.get(name) {
                Some(param) => {
                    param.mark_looked_up();
                    param.values.clone()
                }
                None => vec![],
            }
        }
    };
}

/// Define a macro that can be used to print parameter set items.
macro_rules! display_param {
    ($params: expr, $param_type: literal, $formatter: expr) => {
        let mut names: Vec<&String> = $params.keys().collect();
        names.sort();
        for name in names {
            let param = &$params[name];
            write!($formatter, "\"{} {}\" [", $param_type, name)?;
            for (i, v) in param.values.iter().enumerate() {
                if i > 0 {
                    write!($formatter, " ")?;
                }
                write!($formatter, "{}", v)?;
            }
            writeln!($formatter, "]")?;
        }
    };
}

/// Collects the names of parameters that were never read.
macro_rules! collect_unused {
    ($params: expr, $param_type: literal, $unused: expr) => {
        for (name, param) in $params.iter() {
            if !param.looked_up() {
                $unused.push(format!("{} {}", $param_type, name));
            }
        }
    };
}

impl ParamSet {
    /// Returns a new `ParamSet`.
    pub fn new() -> Self {
        Self {
            bools: HashMap::new(),
            ints: HashMap::new(),
            floats: HashMap::new(),
            spectra: HashMap::new(),
            strings: HashMap::new(),
            textures: HashMap::new(),
        }
    }

    paramset_erase!(erase_int, ints);
    paramset_find_one!(find_one_int, Int, ints);
    paramset_find!(find_int, Int, ints);
    paramset_add!(add_int, Int, ints);

    paramset_erase!(erase_bool, bools);
    paramset_find_one!(find_one_bool, bool, bools);
    paramset_find!(find_bool, bool, bools);
    paramset_add!(add_bool, bool, bools);

    paramset_erase!(erase_float, floats);
    paramset_find_one!(find_one_float, Float, floats);
    paramset_find!(find_float, Float, floats);
    paramset_add!(add_float, Float, floats);

    paramset_erase!(erase_string, strings);
    paramset_find_one!(find_one_string, String, strings);
    paramset_find!(find_string, String, strings);
    paramset_add!(add_string, String, strings);

    paramset_erase!(erase_texture, textures);
    paramset_find_one!(find_one_texture, String, textures);
    paramset_find!(find_texture, String, textures);
    paramset_add!(add_texture, String, textures);

    paramset_erase!(erase_spectrum, spectra);
    paramset_find_one!(find_one_spectrum, Spectrum, spectra);
    paramset_find!(find_spectrum, Spectrum, spectra);
    paramset_add!(add_spectrum, Spectrum, spectra);

    /// Add/replace an RGB spectrum.
    ///
    /// * `name`   - Parameter name.
    /// * `values` - RGB values in a linear slice.
    pub fn add_rgb_spectrum(&mut self, name: &str, values: &[Float]) {
        let n = values.len();
        assert!(n % 3 == 0, "RGB spectrum values % 3 != 0");

        self.spectra.insert(
            String::from(name),
            ParamSetItem::new(
                values
                    .chunks_exact(3)
                    .map(|c| Spectrum::from_rgb([c[0], c[1], c[2]]))
                    .collect(),
            ),
        );
    }

    /// Returns the names of all parameters that were never looked up, each
    /// prefixed by its type, in sorted order.
    pub fn unused(&self) -> Vec<String> {
        let mut unused = vec![];
        collect_unused!(self.bools, "bool", unused);
        collect_unused!(self.ints, "integer", unused);
        collect_unused!(self.floats, "float", unused);
        collect_unused!(self.spectra, "rgb", unused);
        collect_unused!(self.strings, "string", unused);
        collect_unused!(self.textures, "texture", unused);
        unused.sort();
        unused
    }

    /// Clear all parameter set items.
    pub fn clear(&mut self) {
        self.bools.clear();
        self.ints.clear();
        self.floats.clear();
        self.spectra.clear();
        self.strings.clear();
        self.textures.clear();
    }
}

impl Default for ParamSet {
    /// Returns the "default value" for `ParamSet`.
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ParamSet {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_param!(self.bools, "bool", f);
        display_param!(self.ints, "integer", f);
        display_param!(self.floats, "float", f);
        display_param!(self.spectra, "rgb", f);
        display_param!(self.strings, "string", f);
        display_param!(self.textures, "texture", f);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_one_returns_first_value() {
        let mut ps = ParamSet::new();
        ps.add_float("sigma", &[20.0, 30.0]);
        assert_eq!(ps.find_one_float("sigma"), Some(20.0));
        assert_eq!(ps.find_one_float("roughness"), None);
        assert_eq!(ps.find_float("sigma"), vec![20.0, 30.0]);
    }

    #[test]
    fn add_replaces_and_erase_removes() {
        let mut ps = ParamSet::new();
        ps.add_bool("thin", &[false]);
        ps.add_bool("thin", &[true]);
        assert_eq!(ps.find_one_bool("thin"), Some(true));
        assert!(ps.erase_bool("thin"));
        assert!(!ps.erase_bool("thin"));
        assert_eq!(ps.find_one_bool("thin"), None);
    }

    #[test]
    fn rgb_spectrum_groups_triples() {
        let mut ps = ParamSet::new();
        ps.add_rgb_spectrum("Kd", &[0.1, 0.2, 0.3, 0.4, 0.5, 0.6]);
        let s = ps.find_spectrum("Kd");
        assert_eq!(s.len(), 2);
        assert_eq!(s[0].to_rgb(), [0.1, 0.2, 0.3]);
        assert_eq!(s[1].to_rgb(), [0.4, 0.5, 0.6]);
    }

    #[test]
    #[should_panic]
    fn rgb_spectrum_rejects_partial_triple() {
        let mut ps = ParamSet::new();
        ps.add_rgb_spectrum("Kd", &[0.1, 0.2]);
    }

    #[test]
    fn tracks_unused_parameters() {
        let mut ps = ParamSet::new();
        ps.add_float("roughness", &[0.2]);
        ps.add_string("type", &[String::from("matte")]);
        ps.add_texture("Kd", &[String::from("wood")]);
        let _ = ps.find_one_float("roughness");
        let _ = ps.find_one_string("type");
        assert_eq!(ps.unused(), vec![String::from("texture Kd")]);
    }

    #[test]
    fn display_sorted_by_name() {
        let mut ps = ParamSet::new();
        ps.add_float("sigma", &[10.0]);
        ps.add_float("eta", &[1.5, 2.0]);
        assert_eq!(format!("{}", ps), "\"float eta\" [1.5 2]\n\"float sigma\" [10]\n");
    }
}
