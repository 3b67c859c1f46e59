// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// This layer contains the Burn model code and the inference
// wrapper around it. Tensor shapes only exist here and in the
// data-layer batcher; the domain layer never sees them.
//
// What's in this layer:
//
//   model.rs     — The CBOW classifier architecture:
//                  • embedding table (random or pre-trained)
//                  • sum pooling with mask exclusion
//                  • dropout
//                  • linear projection to vocabulary logits
//
//   predictor.rs — End-to-end inference wrapper:
//                  JSON request → index batch → forward pass
//                  → softmax → top class per input → JSON response

/// CBOW embedding + linear classifier
pub mod model;

/// JSON-in/JSON-out inference wrapper
pub mod predictor;
