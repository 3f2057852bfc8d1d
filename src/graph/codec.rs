//! JSON shape of the graph: `{ "id": { "neighbor": weight, ... }, ... }`.
//!
//! Deserialization walks the maps in document order so node and neighbor
//! order (and therefore tie-breaking) follows the file, not hash order.

use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::{Edge, WeightedGraph};

impl Serialize for WeightedGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (slot, id) in self.ids.iter().enumerate() {
            map.serialize_entry(id, &EdgesAsMap(&self.adjacency[slot]))?;
        }
        map.end()
    }
}

struct EdgesAsMap<'a>(&'a [Edge]);

impl Serialize for EdgesAsMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for edge in self.0 {
            map.serialize_entry(&edge.target, &edge.weight)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for WeightedGraph {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = deserializer.deserialize_map(OrderedMapVisitor::<OrderedNeighbors>::new())?;
        Ok(WeightedGraph::from_adjacency(
            entries.into_iter().map(|(id, neighbors)| (id, neighbors.0)),
        ))
    }
}

/// Neighbor mapping as an ordered list of `(target, weight)` pairs.
struct OrderedNeighbors(Vec<(String, f64)>);

impl<'de> Deserialize<'de> for OrderedNeighbors {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer
            .deserialize_map(OrderedMapVisitor::<f64>::new())
            .map(OrderedNeighbors)
    }
}

struct OrderedMapVisitor<V> {
    marker: std::marker::PhantomData<V>,
}

impl<V> OrderedMapVisitor<V> {
    fn new() -> Self {
        Self { marker: std::marker::PhantomData }
    }
}

impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
    type Value = Vec<(String, V)>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map keyed by landmark identifier")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            entries.push((key, value));
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_keeps_document_order() {
        let json = r#"{
            "zeta": { "alpha": 2, "mid": 1.5 },
            "alpha": { "zeta": 2 },
            "mid": {}
        }"#;
        let g: WeightedGraph = serde_json::from_str(json).unwrap();
        let ids: Vec<_> = g.all_ids().collect();
        assert_eq!(ids, vec!["zeta", "alpha", "mid"]);

        let targets: Vec<_> = g.neighbors("zeta").unwrap().iter().map(|e| e.target.as_str()).collect();
        assert_eq!(targets, vec!["alpha", "mid"]);
        assert_eq!(g.edge_weight("zeta", "mid"), Some(1.5));
    }

    #[test]
    fn test_serialize_shape() {
        let g = WeightedGraph::from_adjacency([("a", vec![("b", 1.0)]), ("b", vec![])]);
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, r#"{"a":{"b":1.0},"b":{}}"#);

        let back: WeightedGraph = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn test_rejects_non_numeric_weight() {
        let err = serde_json::from_str::<WeightedGraph>(r#"{"a": {"b": "far"}}"#);
        assert!(err.is_err());
    }
}
