//! XML encoding of explicit domain parameters and public keys
//!
//! The document follows the `xmldsig-more` explicit-parameters schema:
//!
//! ```text
//! <ECDSAKeyValue xmlns="http://www.w3.org/2001/04/xmldsig-more#"
//!                xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
//!   <DomainParameters>
//!     <ExplicitParams>
//!       <FieldParams xsi:type="PrimeFieldParamsType"><P>…</P></FieldParams>
//!       <CurveParams>
//!         <A xsi:type="PrimeFieldElemType" Value="…"/>
//!         <B xsi:type="PrimeFieldElemType" Value="…"/>
//!       </CurveParams>
//!       <BasePointParams>
//!         <BasePoint><X …/><Y …/></BasePoint>
//!         <Order>…</Order>
//!         <Cofactor>…</Cofactor>
//!       </BasePointParams>
//!     </ExplicitParams>
//!   </DomainParameters>
//!   <PublicKey><X …/><Y …/></PublicKey>
//! </ECDSAKeyValue>
//! ```
//!
//! Values are canonical non-negative decimal strings. Decoding is strict and
//! order-sensitive; it performs no cryptographic validation.

use core::fmt::Display;

use gostec_algorithms::ec::weierstrass::{from_signed_le_bytes, normalize, to_fixed_le_bytes};
use gostec_api::{Error, KeySize, Result};
use gostec_common::{EcCurve, EcParameters, EcPoint};
use num_bigint::{BigInt, BigUint};
use num_traits::One;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;
use quick_xml::Writer;

/// Namespace of every element in the document
pub const NAMESPACE: &str = "http://www.w3.org/2001/04/xmldsig-more#";
/// Namespace of the `xsi:type` attribute
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

const PRIME_FIELD_ELEM_TYPE: &str = "PrimeFieldElemType";
const PRIME_FIELD_PARAMS_TYPE: &str = "PrimeFieldParamsType";

const ENCODE: &str = "XML encode";
const DECODE: &str = "XML decode";

/// Encode curve and public key; the private scalar is never written
pub fn to_xml(parameters: &EcParameters) -> Result<String> {
    let mut w = XmlWriter {
        inner: Writer::new(Vec::new()),
    };
    let curve = &parameters.curve;

    w.start(
        BytesStart::new("ECDSAKeyValue")
            .with_attributes([("xmlns", NAMESPACE), ("xmlns:xsi", XSI_NAMESPACE)]),
    )?;
    w.start(BytesStart::new("DomainParameters"))?;
    w.start(BytesStart::new("ExplicitParams"))?;

    w.start(BytesStart::new("FieldParams").with_attributes([("xsi:type", PRIME_FIELD_PARAMS_TYPE)]))?;
    w.text_element("P", &curve.prime)?;
    w.end("FieldParams")?;

    w.start(BytesStart::new("CurveParams"))?;
    w.field_element("A", &curve.a)?;
    w.field_element("B", &curve.b)?;
    w.end("CurveParams")?;

    w.start(BytesStart::new("BasePointParams"))?;
    w.point("BasePoint", &curve.g)?;
    w.text_element("Order", &curve.order)?;
    if let Some(cofactor) = &curve.cofactor {
        w.text_element("Cofactor", cofactor)?;
    }
    w.end("BasePointParams")?;

    w.end("ExplicitParams")?;
    w.end("DomainParameters")?;
    w.point("PublicKey", &parameters.q)?;
    w.end("ECDSAKeyValue")?;

    String::from_utf8(w.inner.into_inner()).map_err(|e| Error::format(ENCODE, e.to_string()))
}

/// Decode a document into public parameters of the given key size
///
/// Every field element, including order and cofactor, is emitted as exactly
/// `key_size.bytes()` little-endian bytes.
pub fn from_xml(xml: &str, key_size: KeySize) -> Result<EcParameters> {
    let mut r = XmlCursor::new(xml, key_size);

    r.expect_start("ECDSAKeyValue")?;
    r.expect_start("DomainParameters")?;
    r.expect_start("ExplicitParams")?;

    let field_params = r.expect_start("FieldParams")?;
    let (xsi_type, _) = r.attributes(&field_params)?;
    check_type("FieldParams", xsi_type, PRIME_FIELD_PARAMS_TYPE)?;
    let prime = r.text_element("P")?;
    r.expect_end("FieldParams")?;

    r.expect_start("CurveParams")?;
    let a = r.field_element("A")?;
    let b = r.field_element("B")?;
    r.expect_end("CurveParams")?;

    r.expect_start("BasePointParams")?;
    let g = r.point("BasePoint")?;
    let order = r.text_element("Order")?;
    let cofactor = match r.next()? {
        Event::Start(e) if e.local_name().as_ref() == b"Cofactor" => {
            let value = r.text_content("Cofactor")?;
            r.expect_end("BasePointParams")?;
            Some(value)
        }
        Event::End(e) if e.local_name().as_ref() == b"BasePointParams" => None,
        other => return Err(unexpected("<Cofactor> or </BasePointParams>", &other)),
    };

    r.expect_end("ExplicitParams")?;
    r.expect_end("DomainParameters")?;
    let q = r.point("PublicKey")?;
    r.expect_end("ECDSAKeyValue")?;
    r.expect_eof()?;

    Ok(EcParameters {
        curve: EcCurve {
            prime,
            a,
            b,
            g,
            order,
            cofactor,
        },
        q,
        d: None,
    })
}

/// Canonical non-negative decimal for a little-endian buffer
///
/// A buffer whose top bit is set reads as negative in two's complement and
/// is corrected by adding `2^(8 * len)`.
pub fn to_decimal(bytes: &[u8]) -> String {
    from_signed_le_bytes(bytes).to_string()
}

/// Parse a decimal string into a fixed-width little-endian buffer
///
/// Negative values are folded by adding `2^bits`; bytes above the width are
/// dropped.
pub fn from_decimal(text: &str, key_size: KeySize) -> Result<Vec<u8>> {
    let text = text.trim();
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::format(
            DECODE,
            format!("'{}' is not a decimal integer", text),
        ));
    }
    let value: BigInt = text
        .parse()
        .map_err(|_| Error::format(DECODE, format!("'{}' is not a decimal integer", text)))?;
    let modulus = BigUint::one() << key_size.bits();
    Ok(to_fixed_le_bytes(
        &normalize(&value, &modulus),
        key_size.bytes(),
    ))
}

fn check_type(element: &str, found: Option<String>, expected: &str) -> Result<()> {
    match found {
        Some(t) if t == expected => Ok(()),
        Some(t) => Err(Error::format(
            DECODE,
            format!("<{}> has xsi:type '{}', expected '{}'", element, t, expected),
        )),
        None => Err(Error::format(
            DECODE,
            format!("<{}> is missing its xsi:type attribute", element),
        )),
    }
}

fn unexpected(wanted: &str, found: &Event<'_>) -> Error {
    let found = match found {
        Event::Start(e) | Event::Empty(e) => {
            format!("<{}>", String::from_utf8_lossy(e.local_name().as_ref()))
        }
        Event::End(e) => format!("</{}>", String::from_utf8_lossy(e.local_name().as_ref())),
        Event::Text(_) | Event::CData(_) => "text".to_string(),
        Event::Eof => "end of document".to_string(),
        _ => "markup".to_string(),
    };
    Error::format(DECODE, format!("expected {}, found {}", wanted, found))
}

fn write_error<E: Display>(e: E) -> Error {
    Error::format(ENCODE, e.to_string())
}

struct XmlWriter {
    inner: Writer<Vec<u8>>,
}

impl XmlWriter {
    fn start(&mut self, element: BytesStart<'_>) -> Result<()> {
        self.inner
            .write_event(Event::Start(element))
            .map_err(write_error)
    }

    fn end(&mut self, name: &str) -> Result<()> {
        self.inner
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(write_error)
    }

    fn text_element(&mut self, name: &str, value: &[u8]) -> Result<()> {
        self.start(BytesStart::new(name))?;
        self.inner
            .write_event(Event::Text(BytesText::new(&to_decimal(value))))
            .map_err(write_error)?;
        self.end(name)
    }

    fn field_element(&mut self, name: &str, value: &[u8]) -> Result<()> {
        let value = to_decimal(value);
        let element = BytesStart::new(name).with_attributes([
            ("xsi:type", PRIME_FIELD_ELEM_TYPE),
            ("Value", value.as_str()),
        ]);
        self.inner
            .write_event(Event::Empty(element))
            .map_err(write_error)
    }

    fn point(&mut self, name: &str, point: &EcPoint) -> Result<()> {
        self.start(BytesStart::new(name))?;
        self.field_element("X", &point.x)?;
        self.field_element("Y", &point.y)?;
        self.end(name)
    }
}

/// Forward-only reader over namespace-resolved events
struct XmlCursor<'a> {
    reader: NsReader<&'a [u8]>,
    key_size: KeySize,
}

impl<'a> XmlCursor<'a> {
    fn new(xml: &'a str, key_size: KeySize) -> Self {
        let mut reader = NsReader::from_str(xml);
        reader.config_mut().trim_text(true);
        Self { reader, key_size }
    }

    /// Next significant event; elements outside [`NAMESPACE`] are rejected
    fn next(&mut self) -> Result<Event<'a>> {
        loop {
            let (ns, event) = self
                .reader
                .read_resolved_event()
                .map_err(|e| Error::format(DECODE, e.to_string()))?;
            let in_namespace =
                matches!(ns, ResolveResult::Bound(Namespace(uri)) if uri == NAMESPACE.as_bytes());

            match event {
                Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_) => continue,
                Event::Start(ref e) | Event::Empty(ref e) if !in_namespace => {
                    return Err(Error::format(
                        DECODE,
                        format!(
                            "<{}> is not in the {} namespace",
                            String::from_utf8_lossy(e.local_name().as_ref()),
                            NAMESPACE
                        ),
                    ));
                }
                other => return Ok(other),
            }
        }
    }

    fn expect_start(&mut self, name: &str) -> Result<BytesStart<'a>> {
        match self.next()? {
            Event::Start(e) if e.local_name().as_ref() == name.as_bytes() => Ok(e),
            other => Err(unexpected(&format!("<{}>", name), &other)),
        }
    }

    fn expect_end(&mut self, name: &str) -> Result<()> {
        match self.next()? {
            Event::End(e) if e.local_name().as_ref() == name.as_bytes() => Ok(()),
            other => Err(unexpected(&format!("</{}>", name), &other)),
        }
    }

    fn expect_eof(&mut self) -> Result<()> {
        match self.next()? {
            Event::Eof => Ok(()),
            other => Err(unexpected("end of document", &other)),
        }
    }

    /// `<name>decimal</name>`
    fn text_element(&mut self, name: &str) -> Result<Vec<u8>> {
        self.expect_start(name)?;
        self.text_content(name)
    }

    /// Text and closing tag of an element whose start has been consumed
    fn text_content(&mut self, name: &str) -> Result<Vec<u8>> {
        let text = match self.next()? {
            Event::Text(t) => t
                .unescape()
                .map_err(|e| Error::format(DECODE, e.to_string()))?
                .into_owned(),
            other => return Err(unexpected(&format!("decimal text in <{}>", name), &other)),
        };
        self.expect_end(name)?;
        from_decimal(&text, self.key_size)
    }

    /// `<name xsi:type="PrimeFieldElemType" Value="decimal"/>`
    fn field_element(&mut self, name: &str) -> Result<Vec<u8>> {
        let (element, empty) = match self.next()? {
            Event::Empty(e) if e.local_name().as_ref() == name.as_bytes() => (e, true),
            Event::Start(e) if e.local_name().as_ref() == name.as_bytes() => (e, false),
            other => return Err(unexpected(&format!("<{}>", name), &other)),
        };

        let (xsi_type, value) = self.attributes(&element)?;
        check_type(name, xsi_type, PRIME_FIELD_ELEM_TYPE)?;
        let value = value.ok_or_else(|| {
            Error::format(DECODE, format!("<{}> is missing its Value attribute", name))
        })?;

        if !empty {
            self.expect_end(name)?;
        }
        from_decimal(&value, self.key_size)
    }

    fn point(&mut self, name: &str) -> Result<EcPoint> {
        self.expect_start(name)?;
        let x = self.field_element("X")?;
        let y = self.field_element("Y")?;
        self.expect_end(name)?;
        Ok(EcPoint::new(x, y))
    }

    /// `(xsi:type, Value)` attributes of an element
    fn attributes(&self, element: &BytesStart<'_>) -> Result<(Option<String>, Option<String>)> {
        let mut xsi_type = None;
        let mut value = None;

        for attr in element.attributes() {
            let attr = attr.map_err(|e| Error::format(DECODE, e.to_string()))?;
            if attr.key.as_namespace_binding().is_some() {
                continue;
            }

            let (ns, local) = self.reader.resolve_attribute(attr.key);
            let text = attr
                .unescape_value()
                .map_err(|e| Error::format(DECODE, e.to_string()))?
                .into_owned();

            match ns {
                ResolveResult::Bound(Namespace(uri))
                    if uri == XSI_NAMESPACE.as_bytes() && local.as_ref() == b"type" =>
                {
                    xsi_type = Some(text)
                }
                ResolveResult::Unbound if local.as_ref() == b"Value" => value = Some(text),
                _ => {}
            }
        }

        Ok((xsi_type, value))
    }
}
