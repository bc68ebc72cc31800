// src/noyau/format.rs
//
// Affichage d’un résultat flottant en format “général” (à la %g) :
// p chiffres significatifs, notation fixe ou scientifique selon l’exposant,
// zéros de queue retirés.

/// Bornes de précision (chiffres significatifs) ; au-delà de 17, f64 n’a plus rien à dire.
pub const CHIFFRES_MIN: usize = 1;
pub const CHIFFRES_MAX: usize = 17;

/// Retire les zéros de queue d’une partie décimale, puis le point s’il reste seul.
fn sans_zeros_de_queue(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}

/// Formate `v` avec `chiffres` chiffres significatifs.
///
/// - exposant décimal X (après arrondi) < -4 ou >= chiffres : `d.ddde±XX`
/// - sinon : notation fixe
///
/// ```text
/// 14.0        -> "14"
/// 1.0 / 3.0   -> "0.333333333333"   (12 chiffres)
/// 1e20        -> "1e+20"
/// 0.00001234  -> "1.234e-05"
/// ```
pub fn format_resultat(v: f64, chiffres: usize) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if v == 0.0 {
        return if v.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let p = chiffres.clamp(CHIFFRES_MIN, CHIFFRES_MAX);

    // Arrondi à p chiffres via la notation scientifique de Rust : "d.ddde<X>"
    let sci = format!("{:.*e}", p - 1, v);
    let (mantisse, exposant) = match sci.split_once('e') {
        Some(parts) => parts,
        None => return sci,
    };
    let x: i32 = match exposant.parse() {
        Ok(x) => x,
        Err(_) => return sci,
    };

    if x < -4 || x >= p as i32 {
        let signe = if x < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            sans_zeros_de_queue(mantisse),
            signe,
            x.unsigned_abs()
        )
    } else {
        let decimales = (p as i32 - 1 - x).max(0) as usize;
        let fixe = format!("{:.*}", decimales, v);
        sans_zeros_de_queue(&fixe).to_string()
    }
}
