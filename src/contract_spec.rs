//! Typed conversions between native ([`serde_json::Value`]) arguments/results
//! and `ScVal`, driven by a contract's `ScSpecEntry` list (the WASM
//! `contractspecv0` custom section once parsed into XDR).
use std::str::FromStr;

use num_bigint::{BigInt, BigUint};
use serde_json::{Map, Value};

use crate::address::{Address, AddressTrait};
use crate::scval::Scv;
use crate::xdr::{
    Limits, ReadXdr, ScMap, ScMapEntry, ScSpecEntry, ScSpecFunctionV0, ScSpecTypeDef,
    ScSpecUdtEnumV0, ScSpecUdtErrorEnumCaseV0, ScSpecUdtErrorEnumV0, ScSpecUdtStructV0,
    ScSpecUdtUnionCaseV0, ScSpecUdtUnionV0, ScVal, StringM,
};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ContractSpecError {
    #[error("entry not found: {0}")]
    MissingEntry(String),
    #[error("function not found: {0}")]
    MissingFunction(String),
    #[error("missing argument '{0}' for function '{1}'")]
    MissingArgument(String, String),
    #[error("value does not match expected type {0:?}")]
    InvalidValue(ScSpecTypeDef),
    #[error("unknown enum case '{0}' for {1}")]
    UnknownEnumCase(String, String),
    #[error("enum case '{0}' missing payload for {1}")]
    MissingEnumPayload(String, String),
    #[error("failed to decode spec entry xdr: {0}")]
    Xdr(String),
}

/// Holds a contract's parsed spec entries and converts native values to and
/// from the `ScVal`s its functions expect.
#[derive(Default, Clone)]
pub struct ContractSpec {
    entries: Vec<ScSpecEntry>,
}

impl ContractSpec {
    pub fn new(entries: Vec<ScSpecEntry>) -> Self {
        Self { entries }
    }

    /// Builds a spec from a list of base64-encoded `ScSpecEntry` XDR blobs,
    /// as returned by `stellar-xdr`'s spec-reading tools.
    pub fn from_base64_entries(entries: &[String]) -> Result<Self, ContractSpecError> {
        let parsed = entries
            .iter()
            .map(|e| {
                ScSpecEntry::from_xdr_base64(e, Limits::none())
                    .map_err(|err| ContractSpecError::Xdr(err.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(parsed))
    }

    pub fn entries(&self) -> &[ScSpecEntry] {
        &self.entries
    }

    fn find(&self, name: &str) -> Result<&ScSpecEntry, ContractSpecError> {
        self.entries
            .iter()
            .find(|e| entry_name(e) == name)
            .ok_or_else(|| ContractSpecError::MissingEntry(name.to_string()))
    }

    pub fn find_function(&self, name: &str) -> Result<&ScSpecFunctionV0, ContractSpecError> {
        match self.find(name)? {
            ScSpecEntry::FunctionV0(f) => Ok(f),
            _ => Err(ContractSpecError::MissingFunction(name.to_string())),
        }
    }

    /// Every function this contract exposes.
    pub fn funcs(&self) -> impl Iterator<Item = &ScSpecFunctionV0> {
        self.entries.iter().filter_map(|e| match e {
            ScSpecEntry::FunctionV0(f) => Some(f),
            _ => None,
        })
    }

    pub fn find_error_case(&self, value: u32) -> Result<&ScSpecUdtErrorEnumCaseV0, ContractSpecError> {
        if let Ok(ScSpecEntry::UdtErrorEnumV0(ScSpecUdtErrorEnumV0 { cases, .. })) = self.find("Error") {
            if let Some(case) = cases.iter().find(|case| case.value == value) {
                return Ok(case);
            }
        }
        Err(ContractSpecError::MissingEntry(format!("Error case {value}")))
    }

    /// Converts a single native JSON value into the `ScVal` its `ScSpecTypeDef`
    /// calls for.
    pub fn native_to_xdr_sc_val(
        &self,
        value: &Value,
        ty: &ScSpecTypeDef,
    ) -> Result<ScVal, ContractSpecError> {
        match (ty, value) {
            (ScSpecTypeDef::Bool, Value::Bool(b)) => Ok(Scv::to_bool(*b)),
            (ScSpecTypeDef::Void, Value::Null) => Ok(Scv::to_void()),
            (ScSpecTypeDef::U32, Value::Number(n)) => Ok(Scv::to_u32(
                n.as_u64()
                    .and_then(|v| u32::try_from(v).ok())
                    .ok_or_else(|| ContractSpecError::InvalidValue(ty.clone()))?,
            )),
            (ScSpecTypeDef::I32, Value::Number(n)) => Ok(Scv::to_i32(
                n.as_i64()
                    .and_then(|v| i32::try_from(v).ok())
                    .ok_or_else(|| ContractSpecError::InvalidValue(ty.clone()))?,
            )),
            (ScSpecTypeDef::U64 | ScSpecTypeDef::Timepoint | ScSpecTypeDef::Duration, Value::Number(n)) => {
                Ok(Scv::to_u64(
                    n.as_u64().ok_or_else(|| ContractSpecError::InvalidValue(ty.clone()))?,
                ))
            }
            (ScSpecTypeDef::I64, Value::Number(n)) => Ok(Scv::to_i64(
                n.as_i64().ok_or_else(|| ContractSpecError::InvalidValue(ty.clone()))?,
            )),
            (ScSpecTypeDef::U128, Value::String(s)) => Ok(Scv::to_u128(
                u128::from_str(s).map_err(|_| ContractSpecError::InvalidValue(ty.clone()))?,
            )),
            (ScSpecTypeDef::I128, Value::String(s)) => Ok(Scv::to_i128(
                i128::from_str(s).map_err(|_| ContractSpecError::InvalidValue(ty.clone()))?,
            )),
            (ScSpecTypeDef::U256, Value::String(s)) => Ok(Scv::to_u256(
                &BigUint::from_str(s).map_err(|_| ContractSpecError::InvalidValue(ty.clone()))?,
            )),
            (ScSpecTypeDef::I256, Value::String(s)) => Ok(Scv::to_i256(
                &BigInt::from_str(s).map_err(|_| ContractSpecError::InvalidValue(ty.clone()))?,
            )),
            (ScSpecTypeDef::Symbol, Value::String(s)) => {
                Scv::to_symbol(s).map_err(|_| ContractSpecError::InvalidValue(ty.clone()))
            }
            (ScSpecTypeDef::String, Value::String(s)) => {
                Scv::to_string_val(s).map_err(|_| ContractSpecError::InvalidValue(ty.clone()))
            }
            (ScSpecTypeDef::Bytes | ScSpecTypeDef::BytesN(_), Value::String(s)) => {
                let bytes = hex::decode(s).map_err(|_| ContractSpecError::InvalidValue(ty.clone()))?;
                Scv::to_bytes(bytes).map_err(|_| ContractSpecError::InvalidValue(ty.clone()))
            }
            (ScSpecTypeDef::Address | ScSpecTypeDef::MuxedAddress, Value::String(s)) => {
                let address =
                    Address::new(s).map_err(|_| ContractSpecError::InvalidValue(ty.clone()))?;
                Scv::to_address(&address).map_err(|_| ContractSpecError::InvalidValue(ty.clone()))
            }
            (ScSpecTypeDef::Option(inner), Value::Null) => Ok(Scv::to_void()),
            (ScSpecTypeDef::Option(inner), v) => self.native_to_xdr_sc_val(v, &inner.value_type),
            (ScSpecTypeDef::Vec(inner), Value::Array(items)) => {
                let values = items
                    .iter()
                    .map(|item| self.native_to_xdr_sc_val(item, &inner.element_type))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Scv::to_vec(values))
            }
            (ScSpecTypeDef::Tuple(inner), Value::Array(items)) => {
                if items.len() != inner.value_types.len() {
                    return Err(ContractSpecError::InvalidValue(ty.clone()));
                }
                let values = items
                    .iter()
                    .zip(inner.value_types.iter())
                    .map(|(item, elem_ty)| self.native_to_xdr_sc_val(item, elem_ty))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Scv::to_vec(values))
            }
            (ScSpecTypeDef::Map(inner), Value::Object(map)) => {
                let entries = map
                    .iter()
                    .map(|(k, v)| {
                        let key = self.native_to_xdr_sc_val(&Value::String(k.clone()), &inner.key_type)?;
                        let val = self.native_to_xdr_sc_val(v, &inner.value_type)?;
                        Ok((key, val))
                    })
                    .collect::<Result<Vec<_>, ContractSpecError>>()?;
                Ok(Scv::to_map(entries))
            }
            (ScSpecTypeDef::Udt(udt), v) => self.native_to_udt(&udt.name.to_utf8_string_lossy(), v),
            (ScSpecTypeDef::Result(inner), v) => self.native_to_xdr_sc_val(v, &inner.ok_type),
            _ => Err(ContractSpecError::InvalidValue(ty.clone())),
        }
    }

    fn native_to_udt(&self, name: &str, value: &Value) -> Result<ScVal, ContractSpecError> {
        match (self.find(name)?.clone(), value) {
            (ScSpecEntry::UdtStructV0(strukt), Value::Object(map)) => {
                self.native_to_struct(&strukt, map)
            }
            (ScSpecEntry::UdtStructV0(strukt), Value::Array(items)) => {
                self.native_to_tuple_struct(&strukt, items)
            }
            (ScSpecEntry::UdtUnionV0(union), v @ (Value::String(_) | Value::Object(_))) => {
                self.native_to_union(&union, v)
            }
            (ScSpecEntry::UdtEnumV0(enum_), Value::Number(num)) => native_to_const_enum(num, &enum_),
            _ => Err(ContractSpecError::InvalidValue(ScSpecTypeDef::Udt(
                crate::xdr::ScSpecTypeUdt {
                    name: StringM::from_str(name).unwrap_or_default(),
                },
            ))),
        }
    }

    fn native_to_struct(
        &self,
        strukt: &ScSpecUdtStructV0,
        map: &Map<String, Value>,
    ) -> Result<ScVal, ContractSpecError> {
        let entries = strukt
            .fields
            .iter()
            .map(|field| {
                let name = field.name.to_utf8_string_lossy();
                let v = map
                    .get(&name)
                    .ok_or_else(|| ContractSpecError::MissingArgument(name.clone(), strukt.name.to_utf8_string_lossy()))?;
                let val = self.native_to_xdr_sc_val(v, &field.type_)?;
                let key = Scv::to_symbol(&name).map_err(|_| ContractSpecError::InvalidValue(field.type_.clone()))?;
                Ok(ScMapEntry { key, val })
            })
            .collect::<Result<Vec<_>, ContractSpecError>>()?;
        let map: ScMap = entries.try_into().unwrap_or_default();
        Ok(ScVal::Map(Some(map)))
    }

    fn native_to_tuple_struct(
        &self,
        strukt: &ScSpecUdtStructV0,
        items: &[Value],
    ) -> Result<ScVal, ContractSpecError> {
        let values = strukt
            .fields
            .iter()
            .zip(items.iter())
            .map(|(field, v)| self.native_to_xdr_sc_val(v, &field.type_))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Scv::to_vec(values))
    }

    fn native_to_union(
        &self,
        union: &ScSpecUdtUnionV0,
        value: &Value,
    ) -> Result<ScVal, ContractSpecError> {
        let (case_name, payload): (String, Option<Value>) = match value {
            Value::String(s) => (s.clone(), None),
            Value::Object(o) if o.len() == 1 => {
                let (k, v) = o.iter().next().unwrap();
                (k.clone(), Some(v.clone()))
            }
            _ => return Err(ContractSpecError::InvalidValue(ScSpecTypeDef::Void)),
        };

        let case = union
            .cases
            .iter()
            .find(|case| union_case_name(case) == case_name)
            .ok_or_else(|| ContractSpecError::UnknownEnumCase(case_name.clone(), union.name.to_utf8_string_lossy()))?;

        let mut values = vec![Scv::to_symbol(&case_name)
            .map_err(|_| ContractSpecError::UnknownEnumCase(case_name.clone(), union.name.to_utf8_string_lossy()))?];

        match case {
            ScSpecUdtUnionCaseV0::VoidV0(_) => {}
            ScSpecUdtUnionCaseV0::TupleV0(tuple) => {
                let payload = payload.ok_or_else(|| {
                    ContractSpecError::MissingEnumPayload(case_name.clone(), union.name.to_utf8_string_lossy())
                })?;
                if tuple.type_.len() == 1 {
                    values.push(self.native_to_xdr_sc_val(&payload, &tuple.type_[0])?);
                } else if let Value::Array(items) = payload {
                    for (item, ty) in items.iter().zip(tuple.type_.iter()) {
                        values.push(self.native_to_xdr_sc_val(item, ty)?);
                    }
                }
            }
        }
        Ok(Scv::to_vec(values))
    }

    /// Converts a map of named arguments into the positional `ScVal`s a
    /// function invocation expects.
    pub fn func_args_to_sc_vals(
        &self,
        fn_name: &str,
        args: &Map<String, Value>,
    ) -> Result<Vec<ScVal>, ContractSpecError> {
        let func = self.find_function(fn_name)?.clone();
        func.inputs
            .iter()
            .map(|input| {
                let name = input.name.to_utf8_string_lossy();
                let value = args
                    .get(&name)
                    .ok_or_else(|| ContractSpecError::MissingArgument(name.clone(), fn_name.to_string()))?;
                self.native_to_xdr_sc_val(value, &input.type_)
            })
            .collect()
    }

    /// Converts an `ScVal` back into a native JSON value per the given type.
    pub fn sc_val_to_native(&self, val: &ScVal, ty: &ScSpecTypeDef) -> Result<Value, ContractSpecError> {
        match (val, ty) {
            (ScVal::Bool(b), ScSpecTypeDef::Bool) => Ok(Value::Bool(*b)),
            (ScVal::Void, ScSpecTypeDef::Void | ScSpecTypeDef::Option(_)) => Ok(Value::Null),
            (ScVal::U32(v), ScSpecTypeDef::U32) => Ok(Value::from(*v)),
            (ScVal::I32(v), ScSpecTypeDef::I32) => Ok(Value::from(*v)),
            (ScVal::U64(v), ScSpecTypeDef::U64 | ScSpecTypeDef::Timepoint | ScSpecTypeDef::Duration) => {
                Ok(Value::from(*v))
            }
            (ScVal::I64(v), ScSpecTypeDef::I64) => Ok(Value::from(*v)),
            (val @ ScVal::U128(_), ScSpecTypeDef::U128) => {
                Ok(Value::String(Scv::from_u128(val).map_err(|_| ContractSpecError::InvalidValue(ty.clone()))?.to_string()))
            }
            (val @ ScVal::I128(_), ScSpecTypeDef::I128) => {
                Ok(Value::String(Scv::from_i128(val).map_err(|_| ContractSpecError::InvalidValue(ty.clone()))?.to_string()))
            }
            (val @ ScVal::U256(_), ScSpecTypeDef::U256) => {
                Ok(Value::String(Scv::from_u256(val).map_err(|_| ContractSpecError::InvalidValue(ty.clone()))?.to_string()))
            }
            (val @ ScVal::I256(_), ScSpecTypeDef::I256) => {
                Ok(Value::String(Scv::from_i256(val).map_err(|_| ContractSpecError::InvalidValue(ty.clone()))?.to_string()))
            }
            (val @ ScVal::Symbol(_), ScSpecTypeDef::Symbol) => Ok(Value::String(
                Scv::from_symbol(val).map_err(|_| ContractSpecError::InvalidValue(ty.clone()))?,
            )),
            (val @ ScVal::String(_), ScSpecTypeDef::String) => Ok(Value::String(
                Scv::from_string_val(val).map_err(|_| ContractSpecError::InvalidValue(ty.clone()))?,
            )),
            (val @ ScVal::Bytes(_), ScSpecTypeDef::Bytes | ScSpecTypeDef::BytesN(_)) => Ok(Value::String(
                hex::encode(Scv::from_bytes(val).map_err(|_| ContractSpecError::InvalidValue(ty.clone()))?),
            )),
            (ScVal::Address(_), ScSpecTypeDef::Address | ScSpecTypeDef::MuxedAddress) => {
                let address =
                    Scv::from_address(val).map_err(|_| ContractSpecError::InvalidValue(ty.clone()))?;
                Ok(Value::String(address.to_string()))
            }
            (ScVal::Vec(Some(v)), ScSpecTypeDef::Vec(inner)) => Ok(Value::Array(
                v.iter()
                    .map(|item| self.sc_val_to_native(item, &inner.element_type))
                    .collect::<Result<Vec<_>, _>>()?,
            )),
            (ScVal::Vec(Some(v)), ScSpecTypeDef::Tuple(inner)) => Ok(Value::Array(
                v.iter()
                    .zip(inner.value_types.iter())
                    .map(|(item, t)| self.sc_val_to_native(item, t))
                    .collect::<Result<Vec<_>, _>>()?,
            )),
            (ScVal::Map(Some(m)), ScSpecTypeDef::Map(inner)) => {
                let mut out = Map::new();
                for ScMapEntry { key, val } in m.iter() {
                    let key_native = self.sc_val_to_native(key, &inner.key_type)?;
                    let key_str = match key_native {
                        Value::String(s) => s,
                        other => other.to_string(),
                    };
                    out.insert(key_str, self.sc_val_to_native(val, &inner.value_type)?);
                }
                Ok(Value::Object(out))
            }
            (sc_val @ (ScVal::Vec(_) | ScVal::Map(_) | ScVal::U32(_)), ScSpecTypeDef::Udt(udt)) => {
                self.udt_to_native(&udt.name.to_utf8_string_lossy(), sc_val)
            }
            (val, ScSpecTypeDef::Result(inner)) => self.sc_val_to_native(val, &inner.ok_type),
            _ => Err(ContractSpecError::InvalidValue(ty.clone())),
        }
    }

    fn udt_to_native(&self, name: &str, val: &ScVal) -> Result<Value, ContractSpecError> {
        match (self.find(name)?.clone(), val) {
            (ScSpecEntry::UdtStructV0(strukt), ScVal::Map(Some(map))) => {
                let mut out = Map::new();
                for (field, entry) in strukt.fields.iter().zip(map.iter()) {
                    out.insert(
                        field.name.to_utf8_string_lossy(),
                        self.sc_val_to_native(&entry.val, &field.type_)?,
                    );
                }
                Ok(Value::Object(out))
            }
            (ScSpecEntry::UdtStructV0(strukt), ScVal::Vec(Some(items))) => Ok(Value::Array(
                strukt
                    .fields
                    .iter()
                    .zip(items.iter())
                    .map(|(field, item)| self.sc_val_to_native(item, &field.type_))
                    .collect::<Result<Vec<_>, _>>()?,
            )),
            (ScSpecEntry::UdtUnionV0(union), ScVal::Vec(Some(items))) => {
                let items = items.to_vec();
                let (first, rest) = items.split_first().ok_or_else(|| {
                    ContractSpecError::InvalidValue(ScSpecTypeDef::Udt(crate::xdr::ScSpecTypeUdt {
                        name: StringM::from_str(name).unwrap_or_default(),
                    }))
                })?;
                let case_name = Scv::from_symbol(first)
                    .map_err(|_| ContractSpecError::InvalidValue(ScSpecTypeDef::Symbol))?;
                let case = union
                    .cases
                    .iter()
                    .find(|c| union_case_name(c) == case_name)
                    .ok_or_else(|| ContractSpecError::UnknownEnumCase(case_name.clone(), union.name.to_utf8_string_lossy()))?;
                match case {
                    ScSpecUdtUnionCaseV0::VoidV0(_) => Ok(Value::String(case_name)),
                    ScSpecUdtUnionCaseV0::TupleV0(tuple) => {
                        let payload = if tuple.type_.len() == 1 {
                            self.sc_val_to_native(&rest[0], &tuple.type_[0])?
                        } else {
                            Value::Array(
                                rest.iter()
                                    .zip(tuple.type_.iter())
                                    .map(|(v, t)| self.sc_val_to_native(v, t))
                                    .collect::<Result<Vec<_>, _>>()?,
                            )
                        };
                        let mut out = Map::new();
                        out.insert(case_name, payload);
                        Ok(Value::Object(out))
                    }
                }
            }
            (ScSpecEntry::UdtEnumV0(_), ScVal::U32(v)) => Ok(Value::from(*v)),
            _ => Err(ContractSpecError::InvalidValue(ScSpecTypeDef::Udt(
                crate::xdr::ScSpecTypeUdt {
                    name: StringM::from_str(name).unwrap_or_default(),
                },
            ))),
        }
    }

    /// Converts a function's return value into native JSON using its spec'd
    /// output type. Functions with no declared output convert to `Value::Null`.
    pub fn func_res_to_native(&self, fn_name: &str, val: &ScVal) -> Result<Value, ContractSpecError> {
        let func = self.find_function(fn_name)?;
        match func.outputs.first() {
            Some(ty) => self.sc_val_to_native(val, ty),
            None => Ok(Value::Null),
        }
    }
}

fn entry_name(entry: &ScSpecEntry) -> String {
    match entry {
        ScSpecEntry::FunctionV0(x) => x.name.to_utf8_string_lossy(),
        ScSpecEntry::UdtStructV0(x) => x.name.to_utf8_string_lossy(),
        ScSpecEntry::UdtUnionV0(x) => x.name.to_utf8_string_lossy(),
        ScSpecEntry::UdtEnumV0(x) => x.name.to_utf8_string_lossy(),
        ScSpecEntry::UdtErrorEnumV0(x) => x.name.to_utf8_string_lossy(),
        ScSpecEntry::EventV0(x) => x.name.to_utf8_string_lossy(),
    }
}

fn union_case_name(case: &ScSpecUdtUnionCaseV0) -> String {
    match case {
        ScSpecUdtUnionCaseV0::VoidV0(v) => v.name.to_utf8_string_lossy(),
        ScSpecUdtUnionCaseV0::TupleV0(v) => v.name.to_utf8_string_lossy(),
    }
}

fn native_to_const_enum(num: &serde_json::Number, enum_: &ScSpecUdtEnumV0) -> Result<ScVal, ContractSpecError> {
    let num = num
        .as_u64()
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| ContractSpecError::InvalidValue(ScSpecTypeDef::U32))?;
    enum_
        .cases
        .iter()
        .find(|c| c.value == num)
        .map(|c| Scv::to_u32(c.value))
        .ok_or_else(|| ContractSpecError::UnknownEnumCase(num.to_string(), enum_.name.to_utf8_string_lossy()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xdr::{
        ScSpecFunctionInputV0, ScSpecTypeDef, ScSpecUdtEnumCaseV0, ScSpecUdtStructFieldV0,
        ScSpecUdtUnionCaseTupleV0, ScSpecUdtUnionCaseVoidV0, VecM,
    };

    fn sym(s: &str) -> StringM<60> {
        StringM::from_str(s).unwrap()
    }

    fn add_spec() -> ContractSpec {
        ContractSpec::new(vec![ScSpecEntry::FunctionV0(ScSpecFunctionV0 {
            doc: StringM::default(),
            name: sym("add"),
            inputs: vec![
                ScSpecFunctionInputV0 {
                    doc: StringM::default(),
                    name: sym("a"),
                    type_: ScSpecTypeDef::U32,
                },
                ScSpecFunctionInputV0 {
                    doc: StringM::default(),
                    name: sym("b"),
                    type_: ScSpecTypeDef::U32,
                },
            ]
            .try_into()
            .unwrap(),
            outputs: vec![ScSpecTypeDef::U32].try_into().unwrap(),
        })])
    }

    #[test]
    fn converts_function_args_by_name() {
        let spec = add_spec();
        let mut args = Map::new();
        args.insert("a".to_string(), Value::from(1));
        args.insert("b".to_string(), Value::from(2));
        let values = spec.func_args_to_sc_vals("add", &args).unwrap();
        assert_eq!(values, vec![Scv::to_u32(1), Scv::to_u32(2)]);
    }

    #[test]
    fn missing_argument_errors() {
        let spec = add_spec();
        let mut args = Map::new();
        args.insert("a".to_string(), Value::from(1));
        assert!(spec.func_args_to_sc_vals("add", &args).is_err());
    }

    #[test]
    fn converts_function_result() {
        let spec = add_spec();
        let result = spec.func_res_to_native("add", &Scv::to_u32(3)).unwrap();
        assert_eq!(result, Value::from(3));
    }

    #[test]
    fn struct_round_trips() {
        let spec = ContractSpec::new(vec![ScSpecEntry::UdtStructV0(ScSpecUdtStructV0 {
            doc: StringM::default(),
            lib: StringM::default(),
            name: sym("Point"),
            fields: vec![
                ScSpecUdtStructFieldV0 {
                    doc: StringM::default(),
                    name: sym("x"),
                    type_: ScSpecTypeDef::U32,
                },
                ScSpecUdtStructFieldV0 {
                    doc: StringM::default(),
                    name: sym("y"),
                    type_: ScSpecTypeDef::U32,
                },
            ]
            .try_into()
            .unwrap(),
        })]);

        let mut native = Map::new();
        native.insert("x".to_string(), Value::from(1));
        native.insert("y".to_string(), Value::from(2));
        let ty = ScSpecTypeDef::Udt(crate::xdr::ScSpecTypeUdt { name: sym("Point") });

        let sc_val = spec
            .native_to_xdr_sc_val(&Value::Object(native.clone()), &ty)
            .unwrap();
        let back = spec.sc_val_to_native(&sc_val, &ty).unwrap();
        assert_eq!(back, Value::Object(native));
    }

    #[test]
    fn union_void_case_round_trips() {
        let spec = ContractSpec::new(vec![ScSpecEntry::UdtUnionV0(ScSpecUdtUnionV0 {
            doc: StringM::default(),
            lib: StringM::default(),
            name: sym("Color"),
            cases: vec![ScSpecUdtUnionCaseV0::VoidV0(ScSpecUdtUnionCaseVoidV0 {
                doc: StringM::default(),
                name: sym("Red"),
            })]
            .try_into()
            .unwrap(),
        })]);

        let ty = ScSpecTypeDef::Udt(crate::xdr::ScSpecTypeUdt { name: sym("Color") });
        let sc_val = spec
            .native_to_xdr_sc_val(&Value::String("Red".to_string()), &ty)
            .unwrap();
        let back = spec.sc_val_to_native(&sc_val, &ty).unwrap();
        assert_eq!(back, Value::String("Red".to_string()));
    }

    #[test]
    fn union_tuple_case_round_trips() {
        let spec = ContractSpec::new(vec![ScSpecEntry::UdtUnionV0(ScSpecUdtUnionV0 {
            doc: StringM::default(),
            lib: StringM::default(),
            name: sym("Shape"),
            cases: vec![ScSpecUdtUnionCaseV0::TupleV0(ScSpecUdtUnionCaseTupleV0 {
                doc: StringM::default(),
                name: sym("Circle"),
                type_: vec![ScSpecTypeDef::U32].try_into().unwrap(),
            })]
            .try_into()
            .unwrap(),
        })]);

        let ty = ScSpecTypeDef::Udt(crate::xdr::ScSpecTypeUdt { name: sym("Shape") });
        let mut payload = Map::new();
        payload.insert("Circle".to_string(), Value::from(7));
        let sc_val = spec.native_to_xdr_sc_val(&Value::Object(payload.clone()), &ty).unwrap();
        let back = spec.sc_val_to_native(&sc_val, &ty).unwrap();
        assert_eq!(back, Value::Object(payload));
    }

    #[test]
    fn const_enum_round_trips() {
        let spec = ContractSpec::new(vec![ScSpecEntry::UdtEnumV0(ScSpecUdtEnumV0 {
            doc: StringM::default(),
            lib: StringM::default(),
            name: sym("Status"),
            cases: vec![ScSpecUdtEnumCaseV0 {
                doc: StringM::default(),
                name: sym("Active"),
                value: 1,
            }]
            .try_into()
            .unwrap(),
        })]);

        let ty = ScSpecTypeDef::Udt(crate::xdr::ScSpecTypeUdt { name: sym("Status") });
        let sc_val = spec.native_to_xdr_sc_val(&Value::from(1), &ty).unwrap();
        assert_eq!(sc_val, Scv::to_u32(1));
    }
}
