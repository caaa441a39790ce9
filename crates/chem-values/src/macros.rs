//! Macro utilitaria para declarar el conjunto cerrado de tipos de valor.
//!
//! Una sola invocación genera el enum de tags (`ValueKind`), el sum type de
//! valores (`ChemValue`) y el contrato decode/encode, evitando repetir los
//! mismos brazos veintiuna veces.

/// Declara `ValueKind` y `ChemValue` a partir de dos listas: variantes planas
/// (payload string) y variantes adapter (payload + metadata).
///
/// El decode es exhaustivo por construcción: un tag fuera del conjunto
/// cerrado es un error de tipos en compilación, no un caso en runtime.
#[macro_export]
macro_rules! chem_value_kinds {
    (
        plain { $( $p:ident => $pname:literal ),+ $(,)? }
        adapter { $( $a:ident => $aname:literal ),+ $(,)? }
    ) => {
        /// Tag de tipo de valor químico (conjunto cerrado).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum ValueKind {
            $( $p, )+
            $( $a, )+
        }

        impl ValueKind {
            /// Conjunto cerrado completo, en orden de declaración.
            pub const ALL: &'static [ValueKind] = &[
                $( ValueKind::$p, )+
                $( ValueKind::$a, )+
            ];

            /// Nombre canónico del tag, para logs y mensajes de error.
            pub fn name(self) -> &'static str {
                match self {
                    $( ValueKind::$p => $pname, )+
                    $( ValueKind::$a => $aname, )+
                }
            }

            /// Indica si el tag es una variante adapter (payload + metadata).
            pub fn is_adapter(self) -> bool {
                matches!(self, $( ValueKind::$a )|+)
            }
        }

        impl std::fmt::Display for ValueKind {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        /// Valor químico tipado. Semántica de valor: inmutable una vez
        /// construido, igualdad por payload.
        #[derive(Debug, Clone, PartialEq)]
        pub enum ChemValue {
            $( $p(String), )+
            $( $a(String, $crate::AdapterPayload), )+
        }

        impl ChemValue {
            /// Tag del valor.
            pub fn kind(&self) -> ValueKind {
                match self {
                    $( ChemValue::$p(..) => ValueKind::$p, )+
                    $( ChemValue::$a(..) => ValueKind::$a, )+
                }
            }

            /// Payload serializado (la notación química en texto).
            pub fn payload(&self) -> &str {
                match self {
                    $( ChemValue::$p(p) => p, )+
                    $( ChemValue::$a(p, _) => p, )+
                }
            }

            /// Metadata adapter; `None` para variantes planas.
            pub fn adapters(&self) -> Option<&$crate::AdapterPayload> {
                match self {
                    $( ChemValue::$a(_, m) => Some(m), )+
                    _ => None,
                }
            }

            /// Decodifica una celda cruda. JSON null produce `Ok(None)`.
            ///
            /// Una variante plana exige un string; una adapter exige el
            /// registro `{"0": payload, "1": metadata}`. Cualquier otra forma
            /// es un error estructural que se propaga, nunca se silencia.
            pub fn decode(kind: ValueKind,
                          raw: &serde_json::Value)
                          -> Result<Option<ChemValue>, $crate::ValueError> {
                if raw.is_null() {
                    return Ok(None);
                }
                let value = match kind {
                    $( ValueKind::$p => ChemValue::$p($crate::value::expect_plain(kind, raw)?), )+
                    $( ValueKind::$a => {
                        let (payload, adapters) = $crate::value::expect_adapter(kind, raw)?;
                        ChemValue::$a(payload, adapters)
                    } )+
                };
                Ok(Some(value))
            }

            /// Forma on-the-wire del valor: el payload desnudo para variantes
            /// planas, el registro de dos claves para variantes adapter.
            /// Inverso exacto de `decode` para entradas bien formadas.
            pub fn encode(&self) -> serde_json::Value {
                match self {
                    $( ChemValue::$p(p) => serde_json::Value::String(p.clone()), )+
                    $( ChemValue::$a(p, m) => serde_json::json!({ "0": p, "1": m }), )+
                }
            }
        }
    };
}
