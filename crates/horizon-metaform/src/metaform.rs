//! The Metaform build orchestrator.

use std::collections::HashMap;
use std::sync::Arc;

use horizon_metaform_core::inspection::{
    AttributeMap, ElementKind, InspectionResult, attr, attr_str, attr_truthy, type_name,
};
use horizon_metaform_core::{Signal, WidgetNode, util};
use serde_json::Value;

use crate::config::{MetaformConfig, Pipeline};
use crate::error::{Error, Result};

/// One entry of the save-binding table: which widget holds the current
/// value of which property.
#[derive(Debug, Clone)]
struct Binding {
    widget_id: String,
    names: Vec<String>,
    checkbox: bool,
}

/// Inspects a domain value and populates its container with widgets
/// matching the value's structure.
///
/// A `Metaform` owns its container node exclusively. Each call to
/// [`build_widgets`](Self::build_widgets) clears the container (preserving
/// pre-existing, user-supplied markup), inspects the domain value, runs the
/// configured processor/builder chains and lays the resulting widgets out.
/// Compound properties recurse into nested `Metaform`s, bounded by the
/// inspection depth guard.
///
/// # Example
///
/// ```
/// use horizon_metaform::Metaform;
/// use horizon_metaform_core::WidgetNode;
/// use serde_json::json;
///
/// let mut metaform = Metaform::new(WidgetNode::new("div"));
/// metaform.set_to_inspect(Some(json!({ "name": "Homer", "age": 39 })));
/// metaform.build_widgets()?;
///
/// // The container now holds a table with one row per property
/// assert!(metaform.container().find_by_id("name").is_some());
/// assert!(metaform.container().find_by_id("age").is_some());
/// # Ok::<(), horizon_metaform::Error>(())
/// ```
pub struct Metaform {
    container: WidgetNode,
    path: String,
    to_inspect: Option<Value>,
    l10n: HashMap<String, String>,
    read_only: bool,
    pipeline: Pipeline,
    /// Pre-existing container children, captured at the first clear and
    /// re-cloned into `overridden_nodes` on every pass.
    original_nodes: Option<Vec<WidgetNode>>,
    overridden_nodes: Vec<WidgetNode>,
    bindings: Vec<Binding>,
    build_end: Signal<()>,
    building: bool,
    reentered: bool,
    remaining_depth: usize,
    /// `(path, declared type)` frames of the nested builds above this one.
    ancestry: Vec<(String, String)>,
    clear_strategy: Option<Arc<dyn Fn(&mut Metaform) + Send + Sync>>,
}

impl Metaform {
    /// Create a Metaform bound to `container`, with the default pipeline.
    pub fn new(container: WidgetNode) -> Self {
        Self::with_config(container, MetaformConfig::new())
    }

    /// Create a Metaform bound to `container` with the given configuration.
    pub fn with_config(container: WidgetNode, config: MetaformConfig) -> Self {
        let pipeline = Pipeline::resolve(config);
        let mut metaform = Self {
            container,
            path: util::ROOT_TYPE.to_string(),
            to_inspect: None,
            l10n: HashMap::new(),
            read_only: pipeline.read_only,
            remaining_depth: pipeline.maximum_inspection_depth,
            pipeline,
            original_nodes: None,
            overridden_nodes: Vec::new(),
            bindings: Vec::new(),
            build_end: Signal::new(),
            building: false,
            reentered: false,
            ancestry: Vec::new(),
            clear_strategy: None,
        };
        metaform.apply_style_class();
        metaform
    }

    /// Create a Metaform from an ordered sequence of partial
    /// configurations, merged field-by-field.
    pub fn with_configs(
        container: WidgetNode,
        configs: impl IntoIterator<Item = MetaformConfig>,
    ) -> Self {
        Self::with_config(container, MetaformConfig::merged(configs))
    }

    /// Replace the active configuration without rebuilding. The next
    /// [`build_widgets`](Self::build_widgets) call uses it.
    pub fn reconfigure(&mut self, config: MetaformConfig) {
        self.pipeline = Pipeline::resolve(config);
        self.read_only = self.pipeline.read_only;
        self.remaining_depth = self.pipeline.maximum_inspection_depth;
        self.apply_style_class();
    }

    /// [`reconfigure`](Self::reconfigure) with an ordered sequence of
    /// partial configurations.
    pub fn reconfigure_all(&mut self, configs: impl IntoIterator<Item = MetaformConfig>) {
        self.reconfigure(MetaformConfig::merged(configs));
    }

    // =========================================================================
    // State accessors
    // =========================================================================

    /// The container node this instance owns.
    pub fn container(&self) -> &WidgetNode {
        &self.container
    }

    /// Mutable access to the container, for custom clear strategies and
    /// host integration.
    pub fn container_mut(&mut self) -> &mut WidgetNode {
        &mut self.container
    }

    /// Consume the instance, yielding the container.
    pub fn into_container(self) -> WidgetNode {
        self.container
    }

    /// The dotted property path identifying the inspected value.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Set the dotted property path (`"object"` by default; something like
    /// `"foo.bar"` inspects from a parent).
    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }

    /// The domain value under inspection.
    pub fn to_inspect(&self) -> Option<&Value> {
        self.to_inspect.as_ref()
    }

    /// Set (or clear) the domain value under inspection.
    pub fn set_to_inspect(&mut self, to_inspect: Option<Value>) {
        self.to_inspect = to_inspect;
    }

    /// The localization mapping: property name to label text.
    pub fn l10n(&self) -> &HashMap<String, String> {
        &self.l10n
    }

    /// Set the localization mapping. Matching keys override the label text
    /// the layout sees for that property or action.
    pub fn set_l10n(&mut self, l10n: HashMap<String, String>) {
        self.l10n = l10n;
    }

    /// The instance-wide read-only flag.
    pub fn read_only(&self) -> bool {
        self.read_only
    }

    /// Set the instance-wide read-only flag.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Whether an entry renders read-only: its own `readOnly` attribute or
    /// the instance-wide flag.
    pub fn is_read_only(&self, attributes: &AttributeMap) -> bool {
        self.read_only || attr_truthy(attributes, attr::READ_ONLY)
    }

    /// The pre-existing nodes not yet claimed during the current pass.
    /// Between passes this is empty: leftovers are placed into the layout's
    /// catch-all slot at the end of every build.
    pub fn overridden_nodes(&self) -> &[WidgetNode] {
        &self.overridden_nodes
    }

    /// Remove and return the overridden node carrying the given id, if any.
    /// Called by builders that let pre-existing markup win.
    pub fn claim_overridden(&mut self, id: &str) -> Option<WidgetNode> {
        let index = self
            .overridden_nodes
            .iter()
            .position(|node| node.attribute("id") == Some(id))?;
        Some(self.overridden_nodes.remove(index))
    }

    /// Record a save binding: the widget with `widget_id` holds the value
    /// of the property at `names`. Called by binding processors.
    pub fn push_binding(&mut self, widget_id: String, names: Vec<String>, checkbox: bool) {
        self.bindings.push(Binding {
            widget_id,
            names,
            checkbox,
        });
    }

    /// The signal fired exactly once after every successful build pass,
    /// including passes that end with an empty container.
    pub fn build_end(&self) -> &Signal<()> {
        &self.build_end
    }

    /// Substitute a custom clear strategy, invoked in place of the default
    /// clear step. The strategy is expected to perform the same
    /// responsibility: empty the container, preserving pre-existing nodes.
    pub fn set_clear_strategy(
        &mut self,
        strategy: impl Fn(&mut Metaform) + Send + Sync + 'static,
    ) {
        self.clear_strategy = Some(Arc::new(strategy));
    }

    // =========================================================================
    // Build cycle
    // =========================================================================

    /// Run a full build pass with a fresh inspection.
    pub fn build_widgets(&mut self) -> Result<()> {
        self.run_build(None)
    }

    /// Run a full build pass over an explicit inspection result.
    ///
    /// Passing `None` outside a build is equivalent to
    /// [`build_widgets`](Self::build_widgets). Passing `None` from *inside*
    /// an active build pass — a processor or builder re-entering its own
    /// instance — is a programmer error and fails immediately with
    /// [`Error::InfiniteBuildLoop`]: the re-inspection would trigger the
    /// same call again, forever.
    pub fn build_widgets_from(
        &mut self,
        inspection_result: Option<InspectionResult>,
    ) -> Result<()> {
        if inspection_result.is_none() && self.building {
            // Poison the active pass so the outer build_widgets call fails
            // too, even if the capability swallows this error
            self.reentered = true;
            return Err(Error::InfiniteBuildLoop);
        }
        self.run_build(inspection_result)
    }

    /// Write widget values back onto the domain value.
    ///
    /// Walks the binding table recorded during the last build (nested
    /// Metaform bindings included), reads each bound widget's current value
    /// out of the container tree, and writes it to the recorded property
    /// path — coerced to the JSON type currently held there.
    pub fn save(&mut self) {
        for index in 0..self.bindings.len() {
            let binding = self.bindings[index].clone();
            let raw = {
                let Some(node) = self.container.find_by_id(&binding.widget_id) else {
                    continue;
                };
                if binding.checkbox {
                    None
                } else {
                    match node.attribute("value") {
                        Some(value) => Some(value.to_string()),
                        None if node.tag() == "output" => Some(node.text().to_string()),
                        None => None,
                    }
                }
            };
            let checked = binding.checkbox
                && self
                    .container
                    .find_by_id(&binding.widget_id)
                    .is_some_and(|node| node.attribute("checked") == Some("checked"));

            let Some(target) = self.to_inspect.as_mut() else {
                return;
            };
            let value = if binding.checkbox {
                Value::Bool(checked)
            } else {
                let Some(raw) = raw else { continue };
                coerce_like(util::traverse(target, &binding.names), &raw)
            };
            write_at(target, &binding.names, value);
        }
        tracing::debug!(
            target: "horizon_metaform::pipeline",
            bindings = self.bindings.len(),
            "saved widget values back onto the domain value"
        );
    }

    fn run_build(&mut self, supplied: Option<InspectionResult>) -> Result<()> {
        let was_building = self.building;
        self.building = true;
        let outcome = self.build_pass(supplied);
        self.building = was_building;
        if outcome.is_ok() {
            self.build_end.emit(&());
        }
        outcome
    }

    #[tracing::instrument(skip_all, target = "horizon_metaform::pipeline", level = "debug", fields(path = %self.path))]
    fn build_pass(&mut self, supplied: Option<InspectionResult>) -> Result<()> {
        self.reentered = false;
        let pipeline = self.pipeline.clone();
        let (type_of, names) = util::split_path(&self.path);

        self.clear_widgets();

        let inspection = match supplied {
            Some(result) => Some(result),
            None => self.inspect(&pipeline, &type_of, &names),
        };
        let Some(mut result) = inspection else {
            tracing::debug!(
                target: "horizon_metaform::pipeline",
                "inspection returned nothing; container stays empty"
            );
            return Ok(());
        };

        for processor in &pipeline.inspection_result_processors {
            let processed = processor.process_inspection_result(result, self, &type_of, &names);
            self.ensure_not_reentered()?;
            match processed {
                Some(next) => result = next,
                None => {
                    tracing::debug!(
                        target: "horizon_metaform::pipeline",
                        "inspection result processor ended the build; container stays empty"
                    );
                    return Ok(());
                }
            }
        }

        // The layout works on the container directly, so take it out of
        // self for the duration of the pass
        let mut container = std::mem::take(&mut self.container);
        let outcome = self.layout_pass(&pipeline, &result, &mut container);
        for child in container.children_mut() {
            child.set_built(true);
        }
        self.container = container;
        outcome
    }

    fn layout_pass(
        &mut self,
        pipeline: &Pipeline,
        result: &InspectionResult,
        container: &mut WidgetNode,
    ) -> Result<()> {
        self.bindings.clear();

        for builder in &pipeline.widget_builders {
            builder.on_start_build(self);
        }
        for processor in &pipeline.widget_processors {
            processor.on_start_build(self);
        }
        pipeline.layout.on_start_build(self);
        pipeline.layout.start_container_layout(container, self);
        self.ensure_not_reentered()?;

        for (element, attributes) in self.collect_items(result) {
            let Some(widget) = self.build_item(pipeline, element, &attributes)? else {
                continue;
            };
            let Some(processed) = self.process_widget(pipeline, widget, element, &attributes)?
            else {
                continue;
            };
            pipeline
                .layout
                .layout_widget(processed, element, &attributes, container, self);
            self.ensure_not_reentered()?;
        }

        // Catch-all: pre-existing nodes no property claimed are preserved,
        // never dropped
        for node in std::mem::take(&mut self.overridden_nodes) {
            let attributes = markup_attributes(&node);
            pipeline
                .layout
                .layout_widget(node, ElementKind::Property, &attributes, container, self);
        }

        pipeline.layout.end_container_layout(container, self);
        pipeline.layout.on_end_build(self);
        for processor in &pipeline.widget_processors {
            processor.on_end_build(self);
        }
        for builder in &pipeline.widget_builders {
            builder.on_end_build(self);
        }
        self.ensure_not_reentered()?;
        Ok(())
    }

    /// Sorted, defensively copied items for one pass: each property (or
    /// the root entity when there are none), with `name`, read-only state
    /// and localization folded into the copy.
    fn collect_items(&self, result: &InspectionResult) -> Vec<(ElementKind, AttributeMap)> {
        let mut items = Vec::new();
        let properties = result.sorted_properties();
        if properties.is_empty() {
            let attributes = result.attributes();
            if !attributes.is_empty() {
                items.push((ElementKind::Entity, attributes));
            }
        } else {
            for (name, mut attributes) in properties {
                let element = if attr_str(&attributes, attr::TYPE) == Some(type_name::FUNCTION) {
                    ElementKind::Action
                } else {
                    ElementKind::Property
                };
                attributes.insert(attr::NAME.to_string(), Value::String(name));
                items.push((element, attributes));
            }
        }

        for (_, attributes) in &mut items {
            if self.read_only {
                attributes.insert(attr::READ_ONLY.to_string(), Value::Bool(true));
            }
            if let Some(name) = attr_str(attributes, attr::NAME) {
                if let Some(text) = self.l10n.get(name) {
                    attributes.insert(attr::LABEL.to_string(), Value::String(text.clone()));
                }
            }
        }
        items
    }

    /// Run the widget builder chain; fall back to the terminal strategies
    /// (nested Metaform, then stub) when every builder declines.
    fn build_item(
        &mut self,
        pipeline: &Pipeline,
        element: ElementKind,
        attributes: &AttributeMap,
    ) -> Result<Option<WidgetNode>> {
        for builder in &pipeline.widget_builders {
            let widget = builder.build_widget(element, attributes, self);
            self.ensure_not_reentered()?;
            if let Some(widget) = widget {
                return Ok(Some(widget));
            }
        }

        if element == ElementKind::Property && is_compound(attributes) {
            return Ok(Some(self.build_nested(attributes)?));
        }
        if element == ElementKind::Entity {
            // A compound root renders as this instance's own rows; there is
            // no meaningful single widget for it
            return Ok(None);
        }

        tracing::debug!(
            target: "horizon_metaform::widget_builder",
            name = attr_str(attributes, attr::NAME).unwrap_or_default(),
            "no widget builder matched; using a stub"
        );
        let mut stub = WidgetNode::new("stub");
        if let Some(name) = attr_str(attributes, attr::NAME) {
            stub.set_attribute("name", name);
        }
        Ok(Some(stub))
    }

    /// Recurse into a nested Metaform for a compound property.
    fn build_nested(&mut self, attributes: &AttributeMap) -> Result<WidgetNode> {
        let name = attr_str(attributes, attr::NAME).unwrap_or_default();
        let child_path = format!("{}.{}", self.path, name);
        let declared_type = attr_str(attributes, attr::TYPE).unwrap_or_default().to_string();

        // A named type already on the build path means a cycle: terminate
        // with an empty leaf rather than recursing forever
        let cycle = is_named_type(&declared_type)
            && self
                .ancestry
                .iter()
                .any(|(_, ancestor)| *ancestor == declared_type);
        if cycle {
            tracing::warn!(
                target: "horizon_metaform::pipeline",
                path = %child_path,
                type_of = %declared_type,
                "recursion guard: type already on the build path, building empty"
            );
        }

        let mut ancestry = self.ancestry.clone();
        ancestry.push((self.path.clone(), declared_type));

        let mut child = Metaform {
            container: WidgetNode::new("div"),
            path: child_path,
            to_inspect: self.to_inspect.clone(),
            l10n: self.l10n.clone(),
            read_only: self.read_only || attr_truthy(attributes, attr::READ_ONLY),
            pipeline: self.pipeline.clone(),
            original_nodes: None,
            overridden_nodes: Vec::new(),
            bindings: Vec::new(),
            build_end: Signal::new(),
            building: false,
            reentered: false,
            remaining_depth: if cycle {
                0
            } else {
                self.remaining_depth.saturating_sub(1)
            },
            ancestry,
            clear_strategy: None,
        };
        child.apply_style_class();
        child.build_widgets()?;
        self.bindings.append(&mut child.bindings);
        Ok(child.into_container())
    }

    fn process_widget(
        &mut self,
        pipeline: &Pipeline,
        widget: WidgetNode,
        element: ElementKind,
        attributes: &AttributeMap,
    ) -> Result<Option<WidgetNode>> {
        let mut current = widget;
        for processor in &pipeline.widget_processors {
            let next = processor.process_widget(current, element, attributes, self);
            self.ensure_not_reentered()?;
            match next {
                Some(widget) => current = widget,
                // Dropping one widget does not abort the pass
                None => return Ok(None),
            }
        }
        Ok(Some(current))
    }

    fn inspect(
        &self,
        pipeline: &Pipeline,
        type_of: &str,
        names: &[String],
    ) -> Option<InspectionResult> {
        if self.remaining_depth == 0 {
            tracing::debug!(
                target: "horizon_metaform::pipeline",
                path = %self.path,
                "recursion guard: inspection depth exhausted, building empty"
            );
            return None;
        }
        pipeline
            .inspector
            .inspect(self.to_inspect.as_ref(), type_of, names)
    }

    /// Step 1 of every pass: empty the container, keeping pre-existing
    /// markup aside as the overridden node set.
    fn clear_widgets(&mut self) {
        if let Some(strategy) = self.clear_strategy.clone() {
            strategy(self);
            return;
        }
        let fresh: Vec<WidgetNode> = self
            .container
            .take_children()
            .into_iter()
            .filter(|child| !child.is_built())
            .collect();
        match &mut self.original_nodes {
            Some(originals) => originals.extend(fresh),
            None => self.original_nodes = Some(fresh),
        }
        // Working copies: builders may consume these freely without
        // touching the caller's original markup
        self.overridden_nodes = self.original_nodes.clone().unwrap_or_default();
    }

    fn apply_style_class(&mut self) {
        let Some(style_class) = self.pipeline.style_class.clone() else {
            return;
        };
        let class = match self.container.attribute("class") {
            Some(existing) => format!("{existing} {style_class}"),
            None => style_class,
        };
        self.container.set_attribute("class", class);
    }

    fn ensure_not_reentered(&mut self) -> Result<()> {
        if self.reentered {
            self.reentered = false;
            return Err(Error::InfiniteBuildLoop);
        }
        Ok(())
    }
}

impl std::fmt::Debug for Metaform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metaform")
            .field("path", &self.path)
            .field("read_only", &self.read_only)
            .field("container", &self.container.tag())
            .field("children", &self.container.child_count())
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Metaform: Send, Sync);

/// Whether attributes describe a compound value the pipeline should
/// recurse into rather than stub out.
fn is_compound(attributes: &AttributeMap) -> bool {
    if attributes.contains_key(attr::ENUM) {
        return false;
    }
    match attr_str(attributes, attr::TYPE) {
        None | Some("") | Some(type_name::OBJECT) => true,
        Some(other) => is_named_type(other),
    }
}

/// A type name that is neither empty nor one of the structural built-ins.
fn is_named_type(type_of: &str) -> bool {
    !matches!(
        type_of,
        "" | type_name::OBJECT
            | type_name::ARRAY
            | type_name::STRING
            | type_name::NUMBER
            | type_name::INTEGER
            | type_name::BOOLEAN
            | type_name::DATE
            | type_name::FUNCTION
    )
}

/// Attributes for laying out unclaimed pre-existing markup: the node's own
/// attributes, string-valued.
fn markup_attributes(node: &WidgetNode) -> AttributeMap {
    node.attributes()
        .iter()
        .filter(|(name, _)| name != "id")
        .map(|(name, value)| (name.clone(), Value::String(value.clone())))
        .collect()
}

/// Coerce a widget's string value to the JSON type currently at the target
/// property.
fn coerce_like(existing: Option<&Value>, raw: &str) -> Value {
    match existing {
        Some(Value::Number(_)) => raw
            .parse::<i64>()
            .map(Value::from)
            .or_else(|_| raw.parse::<f64>().map(Value::from))
            .unwrap_or_else(|_| Value::String(raw.to_string())),
        Some(Value::Bool(_)) => Value::Bool(raw == "true"),
        _ => Value::String(raw.to_string()),
    }
}

/// Write a value at a property path, creating the final key when the
/// parent object exists.
fn write_at(target: &mut Value, names: &[String], value: Value) {
    match names.split_last() {
        None => *target = value,
        Some((last, parents)) => {
            if let Some(Value::Object(parent)) = util::traverse_mut(target, parents) {
                parent.insert(last.clone(), value);
            }
        }
    }
}
