use phf::{Set, phf_set};

static ELEMENT_SYMBOLS: Set<&'static str> = phf_set! {
    "H", "He",
    "Li", "Be", "B", "C", "N", "O", "F", "Ne",
    "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar",
    "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn",
    "Ga", "Ge", "As", "Se", "Br", "Kr",
    "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd",
    "In", "Sn", "Sb", "Te", "I", "Xe",
    "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb", "Dy",
    "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt",
    "Au", "Hg", "Tl", "Pb", "Bi", "Po", "At", "Rn",
    "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk", "Cf",
    "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds",
    "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
    "D",
};

/// Normalizes a symbol to its canonical capitalization ("CL" -> "Cl").
///
/// Returns `None` if the result is not a known element symbol.
pub fn canonical_symbol(symbol: &str) -> Option<String> {
    let symbol = symbol.trim();
    let mut chars = symbol.chars();
    let first = chars.next()?;
    let canonical: String = std::iter::once(first.to_ascii_uppercase())
        .chain(chars.map(|c| c.to_ascii_lowercase()))
        .collect();
    ELEMENT_SYMBOLS.contains(canonical.as_str()).then_some(canonical)
}

/// Guesses the element from an atom name such as "C12", "Cl3" or "1HB".
///
/// Leading digits are skipped. A two-letter symbol is only chosen when its second
/// letter is lowercase, since upper-case names like "CA" or "NZ" are carbon and
/// nitrogen far more often than calcium or anything else.
pub fn infer_from_atom_name(name: &str) -> Option<String> {
    let letters: Vec<char> = name
        .trim()
        .chars()
        .skip_while(|c| c.is_ascii_digit())
        .take_while(|c| c.is_ascii_alphabetic())
        .take(2)
        .collect();

    if let [first, second] = letters.as_slice() {
        if second.is_ascii_lowercase() {
            let pair: String = [*first, *second].iter().collect();
            if let Some(symbol) = canonical_symbol(&pair) {
                return Some(symbol);
            }
        }
    }
    letters.first().and_then(|c| canonical_symbol(&c.to_string()))
}

/// Resolves the element for an atom, preferring the explicit element columns.
pub fn resolve_element(element_field: &str, atom_name: &str) -> Option<String> {
    canonical_symbol(element_field).or_else(|| infer_from_atom_name(atom_name))
}
