//! pH shift of a buffer after adding strong acid or base. The added moles are
//! subtracted/added to the conjugate pair, then Henderson-Hasselbalch runs on the
//! post-addition moles. When the addition exhausts either component the buffer is
//! gone: that is a reportable terminal state of the calculation, not an error and
//! not a negative-concentration number.

use crate::calc_api::{CalculationResult, Evaluate, ResultState, ResultValue};
use crate::validator::{CalcError, Constraint, FieldSpec, ensure_positive, validate};
use std::collections::HashMap;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("weak_acid_concentration", Constraint::Positive, Some("mol/L")),
    FieldSpec::required(
        "conjugate_base_concentration",
        Constraint::Positive,
        Some("mol/L"),
    ),
    FieldSpec::required("buffer_volume", Constraint::Positive, Some("mL")),
    FieldSpec::required("pka", Constraint::Any, None),
    FieldSpec::optional("acid_added", Constraint::NonNegative, Some("mol")),
    FieldSpec::optional("base_added", Constraint::NonNegative, Some("mol")),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BufferPhShiftRequest {
    pub weak_acid_concentration: f64,
    pub conjugate_base_concentration: f64,
    /// mL
    pub buffer_volume: f64,
    pub pka: f64,
    /// moles of strong acid added
    pub acid_added: f64,
    /// moles of strong base added
    pub base_added: f64,
}

impl BufferPhShiftRequest {
    pub fn new(
        weak_acid_concentration: f64,
        conjugate_base_concentration: f64,
        buffer_volume: f64,
        pka: f64,
        acid_added: f64,
        base_added: f64,
    ) -> Result<Self, CalcError> {
        ensure_positive("weak_acid_concentration", weak_acid_concentration)?;
        ensure_positive("conjugate_base_concentration", conjugate_base_concentration)?;
        ensure_positive("buffer_volume", buffer_volume)?;
        if acid_added < 0.0 || base_added < 0.0 {
            return Err(CalcError::domain("added moles must not be negative"));
        }
        Ok(Self {
            weak_acid_concentration,
            conjugate_base_concentration,
            buffer_volume,
            pka,
            acid_added,
            base_added,
        })
    }

    pub fn from_raw(raw: &HashMap<String, String>) -> Result<Self, Vec<CalcError>> {
        let input = validate(raw, FIELDS)?;
        let get = |f: &str| input.require(f).map_err(|e| vec![e]);
        Ok(Self {
            weak_acid_concentration: get("weak_acid_concentration")?,
            conjugate_base_concentration: get("conjugate_base_concentration")?,
            buffer_volume: get("buffer_volume")?,
            pka: get("pka")?,
            acid_added: input.get_or("acid_added", 0.0),
            base_added: input.get_or("base_added", 0.0),
        })
    }
}

impl Evaluate for BufferPhShiftRequest {
    fn evaluate(&self) -> Result<CalculationResult, CalcError> {
        let volume_l = self.buffer_volume / 1000.0;
        let moles_acid = self.weak_acid_concentration * volume_l;
        let moles_base = self.conjugate_base_concentration * volume_l;

        let initial_ph = self.pka + (moles_base / moles_acid).log10();

        // strong acid protonates A-, strong base consumes HA
        let final_moles_acid = moles_acid + self.acid_added - self.base_added;
        let final_moles_base = moles_base - self.acid_added + self.base_added;

        let mut result = CalculationResult::default();
        result.push_value(ResultValue::fixed("initial_ph", initial_ph, "", 2));

        if final_moles_acid <= 0.0 || final_moles_base <= 0.0 {
            result.state = ResultState::Exhausted {
                what: "buffer capacity exceeded - all acid or base consumed".to_string(),
            };
            result.push_interpretation(
                "the addition destroyed the buffer, the solution is no longer buffered",
            );
            return Ok(result);
        }

        let final_ph = self.pka + (final_moles_base / final_moles_acid).log10();
        let delta = final_ph - initial_ph;
        result.push_value(ResultValue::fixed("final_ph", final_ph, "", 2));
        result.push_value(ResultValue::fixed("delta_ph", delta, "", 2));

        // observed capacity: moles added per liter per unit of pH change
        let total_added = self.acid_added + self.base_added;
        if total_added > 0.0 && delta.abs() > 0.01 {
            let beta = total_added / volume_l / delta.abs();
            result.push_value(ResultValue::fixed("observed_capacity", beta, "mol/(L*pH)", 3));
        }
        Ok(result)
    }

    fn calculator_id(&self) -> &'static str {
        "buffer_ph_shift"
    }
}
