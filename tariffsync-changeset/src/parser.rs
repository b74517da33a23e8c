//! Event-driven decoding of export documents into a [`ChangeSet`].

use crate::error::{ParseError, ParseResult};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::io::BufRead;
use tariffsync_model::{
    ChangeSet, EntityCollection, EntityKind, EntityRecord, FieldSource, ModelError, Value,
    apply_rank, root_kind,
};
use tracing::{debug, trace};

/// Elements that only group records and carry nothing themselves.
const CONTAINERS: &[&str] = &["items", "parameters", "record"];

#[derive(Debug, Clone, Copy)]
enum HeaderField {
    Id,
    ExportType,
    QueryDateStart,
}

impl HeaderField {
    fn from_element(element: &str) -> Option<Self> {
        match element {
            "id" => Some(HeaderField::Id),
            "exportType" => Some(HeaderField::ExportType),
            "queryDateStart" => Some(HeaderField::QueryDateStart),
            _ => None,
        }
    }
}

#[derive(Debug)]
enum TextTarget {
    Header(HeaderField),
    /// Index into the enclosing record's attributes.
    Field(usize),
}

#[derive(Debug)]
enum Frame {
    Container,
    Record(EntityRecord),
    Text { target: TextTarget, text: String },
}

#[derive(Debug, PartialEq, Eq)]
enum Step {
    Entered,
    Skip,
}

#[derive(Default)]
struct Builder {
    stack: Vec<Frame>,
    change_set: ChangeSet,
}

impl Builder {
    fn start(&mut self, element: &str, tag: &BytesStart<'_>) -> ParseResult<Step> {
        let frame = match self.stack.last() {
            Some(Frame::Text { .. }) => None,
            Some(Frame::Record(parent)) => {
                let kind = parent.kind;
                if let Some(child) = kind.child_for_element(element) {
                    Some(Frame::Record(build_record(child, tag)?))
                } else {
                    kind.attributes
                        .iter()
                        .position(|f| f.source == FieldSource::ElementText && f.attribute == element)
                        .map(|index| Frame::Text {
                            target: TextTarget::Field(index),
                            text: String::new(),
                        })
                }
            }
            _ => {
                if let Some(kind) = root_kind(element) {
                    Some(Frame::Record(build_record(kind, tag)?))
                } else if let Some(header) = HeaderField::from_element(element) {
                    Some(Frame::Text {
                        target: TextTarget::Header(header),
                        text: String::new(),
                    })
                } else if self.stack.is_empty() || CONTAINERS.contains(&element) {
                    Some(Frame::Container)
                } else {
                    None
                }
            }
        };

        match frame {
            Some(frame) => {
                self.stack.push(frame);
                Ok(Step::Entered)
            }
            None => {
                trace!(element, "skipping unmodelled element");
                Ok(Step::Skip)
            }
        }
    }

    fn end(&mut self) -> ParseResult<()> {
        match self.stack.pop() {
            None | Some(Frame::Container) => {}
            Some(Frame::Record(record)) => self.attach(record),
            Some(Frame::Text { target, text }) => self.finish_text(target, text)?,
        }
        Ok(())
    }

    fn text(&mut self, chunk: &str) {
        if let Some(Frame::Text { text, .. }) = self.stack.last_mut() {
            text.push_str(chunk);
        }
    }

    fn finish_text(&mut self, target: TextTarget, text: String) -> ParseResult<()> {
        let text = text.trim();
        match target {
            TextTarget::Header(field) => {
                let value = (!text.is_empty()).then(|| text.to_string());
                let header = &mut self.change_set.header;
                match field {
                    HeaderField::Id => header.id = value,
                    HeaderField::ExportType => header.export_type = value,
                    HeaderField::QueryDateStart => header.query_date_start = value,
                }
            }
            TextTarget::Field(index) => {
                if let Some(Frame::Record(record)) = self.stack.last_mut() {
                    let kind = record.kind;
                    let value = kind.attributes[index]
                        .parse(Some(text))
                        .map_err(|source| ParseError::Record {
                            element: kind.element,
                            source,
                        })?;
                    record.values[index] = value;
                }
            }
        }
        Ok(())
    }

    fn attach(&mut self, record: EntityRecord) {
        if let Some(Frame::Record(parent)) = self.stack.last_mut() {
            parent.push_child(record);
            return;
        }
        let collections = &mut self.change_set.collections;
        match collections.iter_mut().find(|c| c.kind == record.kind) {
            Some(collection) => collection.records.push(record),
            None => {
                let mut collection = EntityCollection::new(record.kind);
                collection.records.push(record);
                collections.push(collection);
            }
        }
    }

    fn finish(mut self) -> ParseResult<ChangeSet> {
        if let Some(element) = self.stack.iter().find_map(|frame| match frame {
            Frame::Record(record) => Some(record.kind.element),
            _ => None,
        }) {
            return Err(ParseError::Truncated { element });
        }
        self.change_set
            .collections
            .sort_by_key(|collection| apply_rank(collection.kind));
        Ok(self.change_set)
    }
}

fn build_record(kind: &'static EntityKind, tag: &BytesStart<'_>) -> ParseResult<EntityRecord> {
    let mut attributes = Vec::new();
    for attribute in tag.attributes() {
        let attribute = attribute.map_err(|e| ParseError::Attribute {
            element: kind.element.to_string(),
            reason: e.to_string(),
        })?;
        let name = String::from_utf8_lossy(attribute.key.local_name().as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|e| ParseError::Attribute {
                element: kind.element.to_string(),
                reason: e.to_string(),
            })?
            .into_owned();
        attributes.push((name, value));
    }
    let lookup = |name: &str| {
        attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    };
    let invalid = |source| ParseError::Record {
        element: kind.element,
        source,
    };

    let mut key = Vec::with_capacity(kind.key.len());
    for field in kind.key {
        let value = field.parse(lookup(field.attribute)).map_err(invalid)?;
        if value.is_null() {
            return Err(invalid(ModelError::MissingKey {
                element: kind.element,
                attribute: field.attribute,
            }));
        }
        key.push(value);
    }

    let mut values = Vec::with_capacity(kind.attributes.len());
    for field in kind.attributes {
        let value = match field.source {
            FieldSource::Attribute => field.parse(lookup(field.attribute)).map_err(invalid)?,
            FieldSource::ElementText => Value::Null,
        };
        values.push(value);
    }

    Ok(EntityRecord {
        kind,
        change_type: lookup("changeType").map(str::to_string),
        key,
        values,
        children: Vec::new(),
    })
}

/// Decodes one export document.
///
/// Elements that are not modelled are skipped with their whole subtree, and
/// `<record>` wrappers are transparent. Root collections come back in catalog
/// apply order, records within a collection in document order.
pub fn parse_change_set<R: BufRead>(input: R) -> ParseResult<ChangeSet> {
    let mut reader = Reader::from_reader(input);
    reader.config_mut().check_end_names = false;

    let mut builder = Builder::default();
    let mut buf = Vec::new();
    let mut skipped = Vec::new();

    loop {
        match reader
            .read_event_into(&mut buf)
            .map_err(|source| ParseError::Xml {
                position: reader.buffer_position() as u64,
                source,
            })? {
            Event::Start(tag) => {
                let element = String::from_utf8_lossy(tag.local_name().as_ref()).into_owned();
                if builder.start(&element, &tag)? == Step::Skip {
                    reader
                        .read_to_end_into(tag.name(), &mut skipped)
                        .map_err(|source| ParseError::Xml {
                            position: reader.buffer_position() as u64,
                            source,
                        })?;
                    skipped.clear();
                }
            }
            Event::Empty(tag) => {
                let element = String::from_utf8_lossy(tag.local_name().as_ref()).into_owned();
                if builder.start(&element, &tag)? == Step::Entered {
                    builder.end()?;
                }
            }
            Event::End(_) => builder.end()?,
            Event::Text(text) => {
                let text = text.unescape().map_err(|source| ParseError::Xml {
                    position: reader.buffer_position() as u64,
                    source,
                })?;
                builder.text(&text);
            }
            Event::CData(data) => builder.text(&String::from_utf8_lossy(&data.into_inner())),
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    let change_set = builder.finish()?;
    debug!(
        collections = change_set.collections.len(),
        records = change_set.record_count(),
        "parsed change set"
    );
    Ok(change_set)
}
