// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC schema attribute tables
//!
//! STEP instances carry their attributes positionally. This module supplies
//! the names: each entity class lists its own explicit attributes and its
//! supertype, and the full declaration-order list is assembled by walking the
//! supertype chain. Names follow IFC4; classes whose explicit attributes
//! differ in IFC2X3 carry an override list.

use crate::guid;
use crate::{DecodedEntity, EntityResolver};
use rustc_hash::FxHashMap;
use std::borrow::Cow;
use std::sync::OnceLock;

/// IFC schema release a model was written against
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SchemaVersion {
    Ifc2x3,
    #[default]
    Ifc4,
    Ifc4x3,
}

impl SchemaVersion {
    /// Map a `FILE_SCHEMA` identifier onto a release
    ///
    /// Anything unrecognised is read with IFC4 names.
    pub fn from_identifier(identifier: &str) -> Self {
        let upper = identifier.trim().to_ascii_uppercase();
        if upper.starts_with("IFC2X3") {
            SchemaVersion::Ifc2x3
        } else if upper.starts_with("IFC4X3") {
            SchemaVersion::Ifc4x3
        } else {
            SchemaVersion::Ifc4
        }
    }
}

/// Explicit attributes every rooted (GUID-bearing) class starts with
pub const ROOT_ATTRIBUTES: &[&str] = &["GlobalId", "OwnerHistory", "Name", "Description"];

/// Leading attributes shared by every `IfcProduct`
pub const PRODUCT_ATTRIBUTES: &[&str] = &[
    "GlobalId",
    "OwnerHistory",
    "Name",
    "Description",
    "ObjectType",
    "ObjectPlacement",
    "Representation",
];

struct EntityDef {
    name: &'static str,
    supertype: Option<&'static str>,
    attributes: &'static [&'static str],
    ifc2x3: Option<&'static [&'static str]>,
}

const fn entity(
    name: &'static str,
    supertype: Option<&'static str>,
    attributes: &'static [&'static str],
) -> EntityDef {
    EntityDef {
        name,
        supertype,
        attributes,
        ifc2x3: None,
    }
}

impl EntityDef {
    const fn ifc2x3(mut self, attributes: &'static [&'static str]) -> Self {
        self.ifc2x3 = Some(attributes);
        self
    }
}

const ENTITIES: &[EntityDef] = &[
    // Kernel
    entity("IfcRoot", None, ROOT_ATTRIBUTES),
    entity("IfcObjectDefinition", Some("IfcRoot"), &[]),
    entity("IfcObject", Some("IfcObjectDefinition"), &["ObjectType"]),
    entity(
        "IfcProject",
        Some("IfcObject"),
        &["LongName", "Phase", "RepresentationContexts", "UnitsInContext"],
    ),
    entity("IfcProduct", Some("IfcObject"), &["ObjectPlacement", "Representation"]),
    entity("IfcGroup", Some("IfcObject"), &[]),
    entity("IfcSystem", Some("IfcGroup"), &[]),
    entity("IfcZone", Some("IfcSystem"), &["LongName"]).ifc2x3(&[]),
    // Spatial structure
    entity("IfcSpatialElement", Some("IfcProduct"), &["LongName"]),
    entity("IfcSpatialStructureElement", Some("IfcSpatialElement"), &["CompositionType"]),
    entity(
        "IfcSite",
        Some("IfcSpatialStructureElement"),
        &["RefLatitude", "RefLongitude", "RefElevation", "LandTitleNumber", "SiteAddress"],
    ),
    entity(
        "IfcBuilding",
        Some("IfcSpatialStructureElement"),
        &["ElevationOfRefHeight", "ElevationOfTerrain", "BuildingAddress"],
    ),
    entity("IfcBuildingStorey", Some("IfcSpatialStructureElement"), &["Elevation"]),
    entity(
        "IfcSpace",
        Some("IfcSpatialStructureElement"),
        &["PredefinedType", "ElevationWithFlooring"],
    )
    .ifc2x3(&["InteriorOrExteriorSpace", "ElevationWithFlooring"]),
    entity("IfcSpatialZone", Some("IfcSpatialElement"), &["PredefinedType"]),
    entity("IfcExternalSpatialStructureElement", Some("IfcSpatialElement"), &[]),
    entity(
        "IfcExternalSpatialElement",
        Some("IfcExternalSpatialStructureElement"),
        &["PredefinedType"],
    ),
    // Elements
    entity("IfcElement", Some("IfcProduct"), &["Tag"]),
    entity("IfcBuildingElement", Some("IfcElement"), &[]),
    entity("IfcBuiltElement", Some("IfcElement"), &[]),
    entity("IfcWall", Some("IfcBuildingElement"), &["PredefinedType"]).ifc2x3(&[]),
    entity("IfcWallStandardCase", Some("IfcWall"), &[]),
    entity("IfcWallElementedCase", Some("IfcWall"), &[]),
    entity("IfcCurtainWall", Some("IfcBuildingElement"), &["PredefinedType"]).ifc2x3(&[]),
    entity("IfcSlab", Some("IfcBuildingElement"), &["PredefinedType"]),
    entity("IfcSlabStandardCase", Some("IfcSlab"), &[]),
    entity("IfcSlabElementedCase", Some("IfcSlab"), &[]),
    entity("IfcRoof", Some("IfcBuildingElement"), &["PredefinedType"]).ifc2x3(&["ShapeType"]),
    entity("IfcBeam", Some("IfcBuildingElement"), &["PredefinedType"]).ifc2x3(&[]),
    entity("IfcBeamStandardCase", Some("IfcBeam"), &[]),
    entity("IfcColumn", Some("IfcBuildingElement"), &["PredefinedType"]).ifc2x3(&[]),
    entity("IfcColumnStandardCase", Some("IfcColumn"), &[]),
    entity("IfcMember", Some("IfcBuildingElement"), &["PredefinedType"]).ifc2x3(&[]),
    entity("IfcMemberStandardCase", Some("IfcMember"), &[]),
    entity("IfcPlate", Some("IfcBuildingElement"), &["PredefinedType"]).ifc2x3(&[]),
    entity("IfcPlateStandardCase", Some("IfcPlate"), &[]),
    entity("IfcFooting", Some("IfcBuildingElement"), &["PredefinedType"]),
    entity(
        "IfcPile",
        Some("IfcBuildingElement"),
        &["PredefinedType", "ConstructionType"],
    ),
    entity("IfcRailing", Some("IfcBuildingElement"), &["PredefinedType"]),
    entity("IfcCovering", Some("IfcBuildingElement"), &["PredefinedType"]),
    entity("IfcChimney", Some("IfcBuildingElement"), &["PredefinedType"]),
    entity("IfcShadingDevice", Some("IfcBuildingElement"), &["PredefinedType"]),
    entity("IfcStair", Some("IfcBuildingElement"), &["PredefinedType"]).ifc2x3(&["ShapeType"]),
    entity(
        "IfcStairFlight",
        Some("IfcBuildingElement"),
        &["NumberOfRisers", "NumberOfTreads", "RiserHeight", "TreadLength", "PredefinedType"],
    )
    .ifc2x3(&["NumberOfRiser", "NumberOfTreads", "RiserHeight", "TreadLength"]),
    entity("IfcRamp", Some("IfcBuildingElement"), &["PredefinedType"]).ifc2x3(&["ShapeType"]),
    entity("IfcRampFlight", Some("IfcBuildingElement"), &["PredefinedType"]).ifc2x3(&[]),
    entity(
        "IfcDoor",
        Some("IfcBuildingElement"),
        &[
            "OverallHeight",
            "OverallWidth",
            "PredefinedType",
            "OperationType",
            "UserDefinedOperationType",
        ],
    )
    .ifc2x3(&["OverallHeight", "OverallWidth"]),
    entity("IfcDoorStandardCase", Some("IfcDoor"), &[]),
    entity(
        "IfcWindow",
        Some("IfcBuildingElement"),
        &[
            "OverallHeight",
            "OverallWidth",
            "PredefinedType",
            "PartitioningType",
            "UserDefinedPartitioningType",
        ],
    )
    .ifc2x3(&["OverallHeight", "OverallWidth"]),
    entity("IfcWindowStandardCase", Some("IfcWindow"), &[]),
    entity("IfcBuildingElementProxy", Some("IfcBuildingElement"), &["PredefinedType"])
        .ifc2x3(&["CompositionType"]),
    entity("IfcCivilElement", Some("IfcElement"), &[]),
    entity("IfcGeographicElement", Some("IfcElement"), &["PredefinedType"]),
    entity("IfcVirtualElement", Some("IfcElement"), &[]),
    entity("IfcElementAssembly", Some("IfcElement"), &["AssemblyPlace", "PredefinedType"]),
    entity("IfcTransportElement", Some("IfcElement"), &["PredefinedType"])
        .ifc2x3(&["OperationType", "CapacityByWeight", "CapacityByNumber"]),
    entity("IfcEquipmentElement", Some("IfcElement"), &[]),
    entity("IfcElectricalElement", Some("IfcElement"), &[]),
    // Components and reinforcement
    entity("IfcElementComponent", Some("IfcElement"), &[]),
    entity("IfcBuildingElementPart", Some("IfcElementComponent"), &["PredefinedType"])
        .ifc2x3(&[]),
    entity("IfcDiscreteAccessory", Some("IfcElementComponent"), &["PredefinedType"])
        .ifc2x3(&[]),
    entity("IfcFastener", Some("IfcElementComponent"), &["PredefinedType"]).ifc2x3(&[]),
    entity(
        "IfcMechanicalFastener",
        Some("IfcElementComponent"),
        &["NominalDiameter", "NominalLength", "PredefinedType"],
    )
    .ifc2x3(&["NominalDiameter", "NominalLength"]),
    entity("IfcVibrationIsolator", Some("IfcElementComponent"), &["PredefinedType"]),
    entity("IfcReinforcingElement", Some("IfcElementComponent"), &["SteelGrade"]),
    entity(
        "IfcReinforcingBar",
        Some("IfcReinforcingElement"),
        &["NominalDiameter", "CrossSectionArea", "BarLength", "PredefinedType", "BarSurface"],
    )
    .ifc2x3(&["NominalDiameter", "CrossSectionArea", "BarLength", "BarRole", "BarSurface"]),
    entity(
        "IfcReinforcingMesh",
        Some("IfcReinforcingElement"),
        &[
            "MeshLength",
            "MeshWidth",
            "LongitudinalBarNominalDiameter",
            "TransverseBarNominalDiameter",
            "LongitudinalBarCrossSectionArea",
            "TransverseBarCrossSectionArea",
            "LongitudinalBarSpacing",
            "TransverseBarSpacing",
            "PredefinedType",
        ],
    )
    .ifc2x3(&[
        "MeshLength",
        "MeshWidth",
        "LongitudinalBarNominalDiameter",
        "TransverseBarNominalDiameter",
        "LongitudinalBarCrossSectionArea",
        "TransverseBarCrossSectionArea",
        "LongitudinalBarSpacing",
        "TransverseBarSpacing",
    ]),
    entity("IfcTendonAnchor", Some("IfcReinforcingElement"), &["PredefinedType"]).ifc2x3(&[]),
    // Features
    entity("IfcFeatureElement", Some("IfcElement"), &[]),
    entity("IfcFeatureElementAddition", Some("IfcFeatureElement"), &[]),
    entity("IfcProjectionElement", Some("IfcFeatureElementAddition"), &["PredefinedType"])
        .ifc2x3(&[]),
    entity("IfcFeatureElementSubtraction", Some("IfcFeatureElement"), &[]),
    entity("IfcOpeningElement", Some("IfcFeatureElementSubtraction"), &["PredefinedType"])
        .ifc2x3(&[]),
    entity("IfcOpeningStandardCase", Some("IfcOpeningElement"), &[]),
    entity("IfcVoidingFeature", Some("IfcFeatureElementSubtraction"), &["PredefinedType"]),
    entity("IfcSurfaceFeature", Some("IfcFeatureElement"), &["PredefinedType"]),
    // Furnishing
    entity("IfcFurnishingElement", Some("IfcElement"), &[]),
    entity("IfcFurniture", Some("IfcFurnishingElement"), &["PredefinedType"]),
    entity("IfcSystemFurnitureElement", Some("IfcFurnishingElement"), &["PredefinedType"]),
    // Distribution
    entity("IfcDistributionElement", Some("IfcElement"), &[]),
    entity("IfcDistributionControlElement", Some("IfcDistributionElement"), &[])
        .ifc2x3(&["ControlElementId"]),
    entity("IfcActuator", Some("IfcDistributionControlElement"), &["PredefinedType"]),
    entity("IfcAlarm", Some("IfcDistributionControlElement"), &["PredefinedType"]),
    entity("IfcController", Some("IfcDistributionControlElement"), &["PredefinedType"]),
    entity("IfcFlowInstrument", Some("IfcDistributionControlElement"), &["PredefinedType"]),
    entity(
        "IfcProtectiveDeviceTrippingUnit",
        Some("IfcDistributionControlElement"),
        &["PredefinedType"],
    ),
    entity("IfcSensor", Some("IfcDistributionControlElement"), &["PredefinedType"]),
    entity(
        "IfcUnitaryControlElement",
        Some("IfcDistributionControlElement"),
        &["PredefinedType"],
    ),
    entity("IfcDistributionFlowElement", Some("IfcDistributionElement"), &[]),
    entity(
        "IfcDistributionChamberElement",
        Some("IfcDistributionFlowElement"),
        &["PredefinedType"],
    ),
    entity("IfcEnergyConversionDevice", Some("IfcDistributionFlowElement"), &[]),
    entity("IfcFlowController", Some("IfcDistributionFlowElement"), &[]),
    entity("IfcFlowFitting", Some("IfcDistributionFlowElement"), &[]),
    entity("IfcFlowMovingDevice", Some("IfcDistributionFlowElement"), &[]),
    entity("IfcFlowSegment", Some("IfcDistributionFlowElement"), &[]),
    entity("IfcFlowStorageDevice", Some("IfcDistributionFlowElement"), &[]),
    entity("IfcFlowTerminal", Some("IfcDistributionFlowElement"), &[]),
    entity("IfcFlowTreatmentDevice", Some("IfcDistributionFlowElement"), &[]),
    entity("IfcAirToAirHeatRecovery", Some("IfcEnergyConversionDevice"), &["PredefinedType"]),
    entity("IfcBoiler", Some("IfcEnergyConversionDevice"), &["PredefinedType"]),
    entity("IfcBurner", Some("IfcEnergyConversionDevice"), &["PredefinedType"]),
    entity("IfcChiller", Some("IfcEnergyConversionDevice"), &["PredefinedType"]),
    entity("IfcCoil", Some("IfcEnergyConversionDevice"), &["PredefinedType"]),
    entity("IfcCondenser", Some("IfcEnergyConversionDevice"), &["PredefinedType"]),
    entity("IfcCooledBeam", Some("IfcEnergyConversionDevice"), &["PredefinedType"]),
    entity("IfcCoolingTower", Some("IfcEnergyConversionDevice"), &["PredefinedType"]),
    entity("IfcElectricGenerator", Some("IfcEnergyConversionDevice"), &["PredefinedType"]),
    entity("IfcElectricMotor", Some("IfcEnergyConversionDevice"), &["PredefinedType"]),
    entity("IfcEngine", Some("IfcEnergyConversionDevice"), &["PredefinedType"]),
    entity("IfcEvaporativeCooler", Some("IfcEnergyConversionDevice"), &["PredefinedType"]),
    entity("IfcEvaporator", Some("IfcEnergyConversionDevice"), &["PredefinedType"]),
    entity("IfcHeatExchanger", Some("IfcEnergyConversionDevice"), &["PredefinedType"]),
    entity("IfcHumidifier", Some("IfcEnergyConversionDevice"), &["PredefinedType"]),
    entity("IfcMotorConnection", Some("IfcEnergyConversionDevice"), &["PredefinedType"]),
    entity("IfcSolarDevice", Some("IfcEnergyConversionDevice"), &["PredefinedType"]),
    entity("IfcTransformer", Some("IfcEnergyConversionDevice"), &["PredefinedType"]),
    entity("IfcTubeBundle", Some("IfcEnergyConversionDevice"), &["PredefinedType"]),
    entity("IfcUnitaryEquipment", Some("IfcEnergyConversionDevice"), &["PredefinedType"]),
    entity("IfcAirTerminalBox", Some("IfcFlowController"), &["PredefinedType"]),
    entity("IfcDamper", Some("IfcFlowController"), &["PredefinedType"]),
    entity("IfcElectricDistributionBoard", Some("IfcFlowController"), &["PredefinedType"]),
    entity("IfcElectricTimeControl", Some("IfcFlowController"), &["PredefinedType"]),
    entity("IfcFlowMeter", Some("IfcFlowController"), &["PredefinedType"]),
    entity("IfcProtectiveDevice", Some("IfcFlowController"), &["PredefinedType"]),
    entity("IfcSwitchingDevice", Some("IfcFlowController"), &["PredefinedType"]),
    entity("IfcValve", Some("IfcFlowController"), &["PredefinedType"]),
    entity("IfcCableCarrierFitting", Some("IfcFlowFitting"), &["PredefinedType"]),
    entity("IfcCableFitting", Some("IfcFlowFitting"), &["PredefinedType"]),
    entity("IfcDuctFitting", Some("IfcFlowFitting"), &["PredefinedType"]),
    entity("IfcJunctionBox", Some("IfcFlowFitting"), &["PredefinedType"]),
    entity("IfcPipeFitting", Some("IfcFlowFitting"), &["PredefinedType"]),
    entity("IfcCompressor", Some("IfcFlowMovingDevice"), &["PredefinedType"]),
    entity("IfcFan", Some("IfcFlowMovingDevice"), &["PredefinedType"]),
    entity("IfcPump", Some("IfcFlowMovingDevice"), &["PredefinedType"]),
    entity("IfcCableCarrierSegment", Some("IfcFlowSegment"), &["PredefinedType"]),
    entity("IfcCableSegment", Some("IfcFlowSegment"), &["PredefinedType"]),
    entity("IfcDuctSegment", Some("IfcFlowSegment"), &["PredefinedType"]),
    entity("IfcPipeSegment", Some("IfcFlowSegment"), &["PredefinedType"]),
    entity("IfcElectricFlowStorageDevice", Some("IfcFlowStorageDevice"), &["PredefinedType"]),
    entity("IfcTank", Some("IfcFlowStorageDevice"), &["PredefinedType"]),
    entity("IfcAirTerminal", Some("IfcFlowTerminal"), &["PredefinedType"]),
    entity("IfcAudioVisualAppliance", Some("IfcFlowTerminal"), &["PredefinedType"]),
    entity("IfcCommunicationsAppliance", Some("IfcFlowTerminal"), &["PredefinedType"]),
    entity("IfcElectricAppliance", Some("IfcFlowTerminal"), &["PredefinedType"]),
    entity("IfcFireSuppressionTerminal", Some("IfcFlowTerminal"), &["PredefinedType"]),
    entity("IfcLamp", Some("IfcFlowTerminal"), &["PredefinedType"]),
    entity("IfcLightFixture", Some("IfcFlowTerminal"), &["PredefinedType"]),
    entity("IfcMedicalDevice", Some("IfcFlowTerminal"), &["PredefinedType"]),
    entity("IfcOutlet", Some("IfcFlowTerminal"), &["PredefinedType"]),
    entity("IfcSanitaryTerminal", Some("IfcFlowTerminal"), &["PredefinedType"]),
    entity("IfcSpaceHeater", Some("IfcFlowTerminal"), &["PredefinedType"]),
    entity("IfcStackTerminal", Some("IfcFlowTerminal"), &["PredefinedType"]),
    entity("IfcWasteTerminal", Some("IfcFlowTerminal"), &["PredefinedType"]),
    entity("IfcDuctSilencer", Some("IfcFlowTreatmentDevice"), &["PredefinedType"]),
    entity("IfcFilter", Some("IfcFlowTreatmentDevice"), &["PredefinedType"]),
    entity("IfcInterceptor", Some("IfcFlowTreatmentDevice"), &["PredefinedType"]),
    // Other products
    entity("IfcAnnotation", Some("IfcProduct"), &[]),
    entity("IfcGrid", Some("IfcProduct"), &["UAxes", "VAxes", "WAxes", "PredefinedType"])
        .ifc2x3(&["UAxes", "VAxes", "WAxes"]),
    entity("IfcProxy", Some("IfcProduct"), &["ProxyType", "Tag"]),
    entity("IfcPort", Some("IfcProduct"), &[]),
    entity(
        "IfcDistributionPort",
        Some("IfcPort"),
        &["FlowDirection", "PredefinedType", "SystemType"],
    )
    .ifc2x3(&["FlowDirection"]),
    entity("IfcStructuralItem", Some("IfcProduct"), &[]),
    entity("IfcStructuralMember", Some("IfcStructuralItem"), &[]),
    entity("IfcStructuralConnection", Some("IfcStructuralItem"), &["AppliedCondition"]),
    // Types
    entity("IfcTypeObject", Some("IfcObjectDefinition"), &["ApplicableOccurrence", "HasPropertySets"]),
    entity("IfcTypeProduct", Some("IfcTypeObject"), &["RepresentationMaps", "Tag"]),
    entity("IfcElementType", Some("IfcTypeProduct"), &["ElementType"]),
    entity("IfcBuildingElementType", Some("IfcElementType"), &[]),
    entity("IfcWallType", Some("IfcBuildingElementType"), &["PredefinedType"]),
    entity("IfcSlabType", Some("IfcBuildingElementType"), &["PredefinedType"]),
    entity("IfcBeamType", Some("IfcBuildingElementType"), &["PredefinedType"]),
    entity("IfcColumnType", Some("IfcBuildingElementType"), &["PredefinedType"]),
    entity("IfcMemberType", Some("IfcBuildingElementType"), &["PredefinedType"]),
    entity("IfcPlateType", Some("IfcBuildingElementType"), &["PredefinedType"]),
    entity("IfcCoveringType", Some("IfcBuildingElementType"), &["PredefinedType"]),
    entity("IfcRailingType", Some("IfcBuildingElementType"), &["PredefinedType"]),
    entity("IfcBuildingElementProxyType", Some("IfcBuildingElementType"), &["PredefinedType"]),
    entity(
        "IfcDoorType",
        Some("IfcBuildingElementType"),
        &["PredefinedType", "OperationType", "ParameterTakesPrecedence", "UserDefinedOperationType"],
    ),
    entity(
        "IfcWindowType",
        Some("IfcBuildingElementType"),
        &[
            "PredefinedType",
            "PartitioningType",
            "ParameterTakesPrecedence",
            "UserDefinedPartitioningType",
        ],
    ),
    entity(
        "IfcDoorStyle",
        Some("IfcTypeProduct"),
        &["OperationType", "ConstructionType", "ParameterTakesPrecedence", "Sizeable"],
    ),
    entity(
        "IfcWindowStyle",
        Some("IfcTypeProduct"),
        &["ConstructionType", "OperationType", "ParameterTakesPrecedence", "Sizeable"],
    ),
    entity("IfcDistributionElementType", Some("IfcElementType"), &[]),
    entity("IfcDistributionFlowElementType", Some("IfcDistributionElementType"), &[]),
    entity("IfcDistributionControlElementType", Some("IfcDistributionElementType"), &[]),
    entity("IfcActuatorType", Some("IfcDistributionControlElementType"), &["PredefinedType"]),
    entity("IfcAlarmType", Some("IfcDistributionControlElementType"), &["PredefinedType"]),
    entity("IfcControllerType", Some("IfcDistributionControlElementType"), &["PredefinedType"]),
    entity("IfcFlowInstrumentType", Some("IfcDistributionControlElementType"), &["PredefinedType"]),
    entity("IfcSensorType", Some("IfcDistributionControlElementType"), &["PredefinedType"]),
    entity("IfcAirTerminalType", Some("IfcDistributionFlowElementType"), &["PredefinedType"]),
    entity("IfcBoilerType", Some("IfcDistributionFlowElementType"), &["PredefinedType"]),
    entity(
        "IfcCableCarrierSegmentType",
        Some("IfcDistributionFlowElementType"),
        &["PredefinedType"],
    ),
    entity("IfcCableSegmentType", Some("IfcDistributionFlowElementType"), &["PredefinedType"]),
    entity("IfcChillerType", Some("IfcDistributionFlowElementType"), &["PredefinedType"]),
    entity("IfcCoilType", Some("IfcDistributionFlowElementType"), &["PredefinedType"]),
    entity("IfcDamperType", Some("IfcDistributionFlowElementType"), &["PredefinedType"]),
    entity("IfcDuctFittingType", Some("IfcDistributionFlowElementType"), &["PredefinedType"]),
    entity("IfcDuctSegmentType", Some("IfcDistributionFlowElementType"), &["PredefinedType"]),
    entity("IfcFanType", Some("IfcDistributionFlowElementType"), &["PredefinedType"]),
    entity("IfcLightFixtureType", Some("IfcDistributionFlowElementType"), &["PredefinedType"]),
    entity("IfcOutletType", Some("IfcDistributionFlowElementType"), &["PredefinedType"]),
    entity("IfcPipeFittingType", Some("IfcDistributionFlowElementType"), &["PredefinedType"]),
    entity("IfcPipeSegmentType", Some("IfcDistributionFlowElementType"), &["PredefinedType"]),
    entity("IfcPumpType", Some("IfcDistributionFlowElementType"), &["PredefinedType"]),
    entity("IfcSanitaryTerminalType", Some("IfcDistributionFlowElementType"), &["PredefinedType"]),
    entity("IfcSpaceHeaterType", Some("IfcDistributionFlowElementType"), &["PredefinedType"]),
    entity("IfcSwitchingDeviceType", Some("IfcDistributionFlowElementType"), &["PredefinedType"]),
    entity("IfcTankType", Some("IfcDistributionFlowElementType"), &["PredefinedType"]),
    entity("IfcValveType", Some("IfcDistributionFlowElementType"), &["PredefinedType"]),
    entity("IfcSpaceType", Some("IfcElementType"), &["PredefinedType", "LongName"])
        .ifc2x3(&["PredefinedType"]),
    entity("IfcFurnishingElementType", Some("IfcElementType"), &[]),
    entity(
        "IfcFurnitureType",
        Some("IfcFurnishingElementType"),
        &["AssemblyPlace", "PredefinedType"],
    )
    .ifc2x3(&["AssemblyPlace"]),
    // Relationships
    entity("IfcRelationship", Some("IfcRoot"), &[]),
    entity("IfcRelDecomposes", Some("IfcRelationship"), &[]),
    entity("IfcRelAggregates", Some("IfcRelDecomposes"), &["RelatingObject", "RelatedObjects"]),
    entity("IfcRelNests", Some("IfcRelDecomposes"), &["RelatingObject", "RelatedObjects"]),
    entity("IfcRelConnects", Some("IfcRelationship"), &[]),
    entity(
        "IfcRelContainedInSpatialStructure",
        Some("IfcRelConnects"),
        &["RelatedElements", "RelatingStructure"],
    ),
    entity(
        "IfcRelVoidsElement",
        Some("IfcRelConnects"),
        &["RelatingBuildingElement", "RelatedOpeningElement"],
    ),
    entity(
        "IfcRelFillsElement",
        Some("IfcRelConnects"),
        &["RelatingOpeningElement", "RelatedBuildingElement"],
    ),
    entity(
        "IfcRelSpaceBoundary",
        Some("IfcRelConnects"),
        &[
            "RelatingSpace",
            "RelatedBuildingElement",
            "ConnectionGeometry",
            "PhysicalOrVirtualBoundary",
            "InternalOrExternalBoundary",
        ],
    ),
    entity(
        "IfcRelConnectsElements",
        Some("IfcRelConnects"),
        &["ConnectionGeometry", "RelatingElement", "RelatedElement"],
    ),
    entity(
        "IfcRelConnectsPathElements",
        Some("IfcRelConnectsElements"),
        &["RelatingPriorities", "RelatedPriorities", "RelatedConnectionType", "RelatingConnectionType"],
    ),
    entity("IfcRelDefines", Some("IfcRelationship"), &[]),
    entity(
        "IfcRelDefinesByProperties",
        Some("IfcRelDefines"),
        &["RelatedObjects", "RelatingPropertyDefinition"],
    ),
    entity("IfcRelDefinesByType", Some("IfcRelDefines"), &["RelatedObjects", "RelatingType"]),
    entity("IfcRelAssociates", Some("IfcRelationship"), &["RelatedObjects"]),
    entity("IfcRelAssociatesMaterial", Some("IfcRelAssociates"), &["RelatingMaterial"]),
    entity(
        "IfcRelAssociatesClassification",
        Some("IfcRelAssociates"),
        &["RelatingClassification"],
    ),
    entity("IfcRelAssigns", Some("IfcRelationship"), &["RelatedObjects", "RelatedObjectsType"]),
    entity("IfcRelAssignsToGroup", Some("IfcRelAssigns"), &["RelatingGroup"]),
    // Property and quantity sets
    entity("IfcPropertyDefinition", Some("IfcRoot"), &[]),
    entity("IfcPropertySetDefinition", Some("IfcPropertyDefinition"), &[]),
    entity("IfcPropertySet", Some("IfcPropertySetDefinition"), &["HasProperties"]),
    entity(
        "IfcElementQuantity",
        Some("IfcPropertySetDefinition"),
        &["MethodOfMeasurement", "Quantities"],
    ),
    entity("IfcProperty", None, &["Name", "Description"]),
    entity("IfcSimpleProperty", Some("IfcProperty"), &[]),
    entity("IfcPropertySingleValue", Some("IfcSimpleProperty"), &["NominalValue", "Unit"]),
    entity(
        "IfcPropertyEnumeratedValue",
        Some("IfcSimpleProperty"),
        &["EnumerationValues", "EnumerationReference"],
    ),
    entity("IfcPropertyListValue", Some("IfcSimpleProperty"), &["ListValues", "Unit"]),
    entity(
        "IfcPropertyBoundedValue",
        Some("IfcSimpleProperty"),
        &["UpperBoundValue", "LowerBoundValue", "Unit", "SetPointValue"],
    )
    .ifc2x3(&["UpperBoundValue", "LowerBoundValue", "Unit"]),
    entity("IfcPropertyEnumeration", None, &["Name", "EnumerationValues", "Unit"]),
    entity("IfcComplexProperty", Some("IfcProperty"), &["UsageName", "HasProperties"]),
    entity("IfcPhysicalQuantity", None, &["Name", "Description"]),
    entity("IfcPhysicalSimpleQuantity", Some("IfcPhysicalQuantity"), &["Unit"]),
    entity("IfcQuantityLength", Some("IfcPhysicalSimpleQuantity"), &["LengthValue", "Formula"])
        .ifc2x3(&["LengthValue"]),
    entity("IfcQuantityArea", Some("IfcPhysicalSimpleQuantity"), &["AreaValue", "Formula"])
        .ifc2x3(&["AreaValue"]),
    entity("IfcQuantityVolume", Some("IfcPhysicalSimpleQuantity"), &["VolumeValue", "Formula"])
        .ifc2x3(&["VolumeValue"]),
    entity("IfcQuantityCount", Some("IfcPhysicalSimpleQuantity"), &["CountValue", "Formula"])
        .ifc2x3(&["CountValue"]),
    entity("IfcQuantityWeight", Some("IfcPhysicalSimpleQuantity"), &["WeightValue", "Formula"])
        .ifc2x3(&["WeightValue"]),
    // Actors and ownership
    entity(
        "IfcOwnerHistory",
        None,
        &[
            "OwningUser",
            "OwningApplication",
            "State",
            "ChangeAction",
            "LastModifiedDate",
            "LastModifyingUser",
            "LastModifyingApplication",
            "CreationDate",
        ],
    ),
    entity(
        "IfcPerson",
        None,
        &[
            "Identification",
            "FamilyName",
            "GivenName",
            "MiddleNames",
            "PrefixTitles",
            "SuffixTitles",
            "Roles",
            "Addresses",
        ],
    )
    .ifc2x3(&[
        "Id",
        "FamilyName",
        "GivenName",
        "MiddleNames",
        "PrefixTitles",
        "SuffixTitles",
        "Roles",
        "Addresses",
    ]),
    entity(
        "IfcOrganization",
        None,
        &["Identification", "Name", "Description", "Roles", "Addresses"],
    )
    .ifc2x3(&["Id", "Name", "Description", "Roles", "Addresses"]),
    entity("IfcPersonAndOrganization", None, &["ThePerson", "TheOrganization", "Roles"]),
    entity(
        "IfcApplication",
        None,
        &["ApplicationDeveloper", "Version", "ApplicationFullName", "ApplicationIdentifier"],
    ),
    entity("IfcActorRole", None, &["Role", "UserDefinedRole", "Description"]),
    entity("IfcAddress", None, &["Purpose", "Description", "UserDefinedPurpose"]),
    entity(
        "IfcPostalAddress",
        Some("IfcAddress"),
        &[
            "InternalLocation",
            "AddressLines",
            "PostalBox",
            "Town",
            "Region",
            "PostalCode",
            "Country",
        ],
    ),
    entity(
        "IfcTelecomAddress",
        Some("IfcAddress"),
        &[
            "TelephoneNumbers",
            "FacsimileNumbers",
            "PagerNumber",
            "ElectronicMailAddresses",
            "WWWHomePageURL",
            "MessagingIDs",
        ],
    )
    .ifc2x3(&[
        "TelephoneNumbers",
        "FacsimileNumbers",
        "PagerNumber",
        "ElectronicMailAddresses",
        "WWWHomePageURL",
    ]),
    // Units
    entity("IfcUnitAssignment", None, &["Units"]),
    entity("IfcNamedUnit", None, &["Dimensions", "UnitType"]),
    entity("IfcSIUnit", Some("IfcNamedUnit"), &["Prefix", "Name"]),
    entity("IfcConversionBasedUnit", Some("IfcNamedUnit"), &["Name", "ConversionFactor"]),
    entity(
        "IfcDimensionalExponents",
        None,
        &[
            "LengthExponent",
            "MassExponent",
            "TimeExponent",
            "ElectricCurrentExponent",
            "ThermodynamicTemperatureExponent",
            "AmountOfSubstanceExponent",
            "LuminousIntensityExponent",
        ],
    ),
    entity("IfcMeasureWithUnit", None, &["ValueComponent", "UnitComponent"]),
    entity("IfcDerivedUnit", None, &["Elements", "UnitType", "UserDefinedType"]),
    entity("IfcDerivedUnitElement", None, &["Unit", "Exponent"]),
    entity("IfcMonetaryUnit", None, &["Currency"]),
    // Materials
    entity("IfcMaterial", None, &["Name", "Description", "Category"]).ifc2x3(&["Name"]),
    entity(
        "IfcMaterialLayer",
        None,
        &[
            "Material",
            "LayerThickness",
            "IsVentilated",
            "Name",
            "Description",
            "Category",
            "Priority",
        ],
    )
    .ifc2x3(&["Material", "LayerThickness", "IsVentilated"]),
    entity("IfcMaterialLayerSet", None, &["MaterialLayers", "LayerSetName", "Description"])
        .ifc2x3(&["MaterialLayers", "LayerSetName"]),
    entity(
        "IfcMaterialLayerSetUsage",
        None,
        &[
            "ForLayerSet",
            "LayerSetDirection",
            "DirectionSense",
            "OffsetFromReferenceLine",
            "ReferenceExtent",
        ],
    )
    .ifc2x3(&["ForLayerSet", "LayerSetDirection", "DirectionSense", "OffsetFromReferenceLine"]),
    entity("IfcMaterialList", None, &["Materials"]),
    entity(
        "IfcMaterialConstituentSet",
        None,
        &["Name", "Description", "MaterialConstituents"],
    ),
    entity(
        "IfcMaterialConstituent",
        None,
        &["Name", "Description", "Material", "Fraction", "Category"],
    ),
    entity(
        "IfcClassificationReference",
        None,
        &["Location", "Identification", "Name", "ReferencedSource", "Description", "Sort"],
    )
    .ifc2x3(&["Location", "ItemReference", "Name", "ReferencedSource"]),
    // Representation
    entity("IfcRepresentationContext", None, &["ContextIdentifier", "ContextType"]),
    entity(
        "IfcGeometricRepresentationContext",
        Some("IfcRepresentationContext"),
        &["CoordinateSpaceDimension", "Precision", "WorldCoordinateSystem", "TrueNorth"],
    ),
    entity(
        "IfcGeometricRepresentationSubContext",
        Some("IfcGeometricRepresentationContext"),
        &["ParentContext", "TargetScale", "TargetView", "UserDefinedTargetView"],
    ),
    entity(
        "IfcRepresentation",
        None,
        &["ContextOfItems", "RepresentationIdentifier", "RepresentationType", "Items"],
    ),
    entity("IfcShapeModel", Some("IfcRepresentation"), &[]),
    entity("IfcShapeRepresentation", Some("IfcShapeModel"), &[]),
    entity("IfcStyledRepresentation", Some("IfcRepresentation"), &[]),
    entity("IfcProductRepresentation", None, &["Name", "Description", "Representations"]),
    entity("IfcProductDefinitionShape", Some("IfcProductRepresentation"), &[]),
    entity(
        "IfcMaterialDefinitionRepresentation",
        Some("IfcProductRepresentation"),
        &["RepresentedMaterial"],
    ),
    entity("IfcRepresentationMap", None, &["MappingOrigin", "MappedRepresentation"]),
    entity(
        "IfcShapeAspect",
        None,
        &[
            "ShapeRepresentations",
            "Name",
            "Description",
            "ProductDefinitional",
            "PartOfProductDefinitionShape",
        ],
    ),
    entity("IfcPresentationLayerAssignment", None, &["Name", "Description", "AssignedItems", "Identifier"]),
    // Placement and geometry
    entity("IfcObjectPlacement", None, &[]),
    entity("IfcLocalPlacement", Some("IfcObjectPlacement"), &["PlacementRelTo", "RelativePlacement"]),
    entity(
        "IfcGridPlacement",
        Some("IfcObjectPlacement"),
        &["PlacementLocation", "PlacementRefDirection"],
    ),
    entity("IfcVirtualGridIntersection", None, &["IntersectingAxes", "OffsetDistances"]),
    entity("IfcGridAxis", None, &["AxisTag", "AxisCurve", "SameSense"]),
    entity("IfcRepresentationItem", None, &[]),
    entity("IfcGeometricRepresentationItem", Some("IfcRepresentationItem"), &[]),
    entity("IfcCartesianPoint", Some("IfcGeometricRepresentationItem"), &["Coordinates"]),
    entity("IfcDirection", Some("IfcGeometricRepresentationItem"), &["DirectionRatios"]),
    entity("IfcVector", Some("IfcGeometricRepresentationItem"), &["Orientation", "Magnitude"]),
    entity("IfcPlacement", Some("IfcGeometricRepresentationItem"), &["Location"]),
    entity("IfcAxis2Placement2D", Some("IfcPlacement"), &["RefDirection"]),
    entity("IfcAxis2Placement3D", Some("IfcPlacement"), &["Axis", "RefDirection"]),
    entity(
        "IfcCartesianTransformationOperator",
        Some("IfcGeometricRepresentationItem"),
        &["Axis1", "Axis2", "LocalOrigin", "Scale"],
    ),
    entity(
        "IfcCartesianTransformationOperator3D",
        Some("IfcCartesianTransformationOperator"),
        &["Axis3"],
    ),
    entity(
        "IfcCartesianTransformationOperator3DnonUniform",
        Some("IfcCartesianTransformationOperator3D"),
        &["Scale2", "Scale3"],
    ),
    entity("IfcMappedItem", Some("IfcRepresentationItem"), &["MappingSource", "MappingTarget"]),
    entity(
        "IfcBoundingBox",
        Some("IfcGeometricRepresentationItem"),
        &["Corner", "XDim", "YDim", "ZDim"],
    ),
    entity("IfcCurve", Some("IfcGeometricRepresentationItem"), &[]),
    entity("IfcBoundedCurve", Some("IfcCurve"), &[]),
    entity("IfcLine", Some("IfcCurve"), &["Pnt", "Dir"]),
    entity("IfcPolyline", Some("IfcBoundedCurve"), &["Points"]),
    entity(
        "IfcTrimmedCurve",
        Some("IfcBoundedCurve"),
        &["BasisCurve", "Trim1", "Trim2", "SenseAgreement", "MasterRepresentation"],
    ),
    entity("IfcConic", Some("IfcCurve"), &["Position"]),
    entity("IfcCircle", Some("IfcConic"), &["Radius"]),
    entity("IfcEllipse", Some("IfcConic"), &["SemiAxis1", "SemiAxis2"]),
    entity(
        "IfcCompositeCurve",
        Some("IfcBoundedCurve"),
        &["Segments", "SelfIntersect"],
    ),
    entity(
        "IfcCompositeCurveSegment",
        Some("IfcGeometricRepresentationItem"),
        &["Transition", "SameSense", "ParentCurve"],
    ),
    entity(
        "IfcIndexedPolyCurve",
        Some("IfcBoundedCurve"),
        &["Points", "Segments", "SelfIntersect"],
    ),
    entity("IfcCartesianPointList2D", Some("IfcGeometricRepresentationItem"), &["CoordList"]),
    entity("IfcCartesianPointList3D", Some("IfcGeometricRepresentationItem"), &["CoordList"]),
    entity("IfcProfileDef", None, &["ProfileType", "ProfileName"]),
    entity("IfcArbitraryClosedProfileDef", Some("IfcProfileDef"), &["OuterCurve"]),
    entity(
        "IfcArbitraryProfileDefWithVoids",
        Some("IfcArbitraryClosedProfileDef"),
        &["InnerCurves"],
    ),
    entity("IfcParameterizedProfileDef", Some("IfcProfileDef"), &["Position"]),
    entity("IfcRectangleProfileDef", Some("IfcParameterizedProfileDef"), &["XDim", "YDim"]),
    entity("IfcCircleProfileDef", Some("IfcParameterizedProfileDef"), &["Radius"]),
    entity(
        "IfcIShapeProfileDef",
        Some("IfcParameterizedProfileDef"),
        &[
            "OverallWidth",
            "OverallDepth",
            "WebThickness",
            "FlangeThickness",
            "FilletRadius",
            "FlangeEdgeRadius",
            "FlangeSlope",
        ],
    )
    .ifc2x3(&["OverallWidth", "OverallDepth", "WebThickness", "FlangeThickness", "FilletRadius"]),
    entity("IfcSolidModel", Some("IfcGeometricRepresentationItem"), &[]),
    entity("IfcSweptAreaSolid", Some("IfcSolidModel"), &["SweptArea", "Position"]),
    entity("IfcExtrudedAreaSolid", Some("IfcSweptAreaSolid"), &["ExtrudedDirection", "Depth"]),
    entity("IfcRevolvedAreaSolid", Some("IfcSweptAreaSolid"), &["Axis", "Angle"]),
    entity("IfcManifoldSolidBrep", Some("IfcSolidModel"), &["Outer"]),
    entity("IfcFacetedBrep", Some("IfcManifoldSolidBrep"), &[]),
    entity("IfcFacetedBrepWithVoids", Some("IfcFacetedBrep"), &["Voids"]),
    entity("IfcAdvancedBrep", Some("IfcManifoldSolidBrep"), &[]),
    entity("IfcAdvancedBrepWithVoids", Some("IfcAdvancedBrep"), &["Voids"]),
    entity("IfcConnectedFaceSet", Some("IfcRepresentationItem"), &["CfsFaces"]),
    entity("IfcClosedShell", Some("IfcConnectedFaceSet"), &[]),
    entity("IfcOpenShell", Some("IfcConnectedFaceSet"), &[]),
    entity("IfcFace", Some("IfcRepresentationItem"), &["Bounds"]),
    entity("IfcFaceBound", Some("IfcRepresentationItem"), &["Bound", "Orientation"]),
    entity("IfcFaceOuterBound", Some("IfcFaceBound"), &[]),
    entity("IfcPolyLoop", Some("IfcRepresentationItem"), &["Polygon"]),
    entity(
        "IfcBooleanResult",
        Some("IfcGeometricRepresentationItem"),
        &["Operator", "FirstOperand", "SecondOperand"],
    ),
    entity("IfcBooleanClippingResult", Some("IfcBooleanResult"), &[]),
    entity(
        "IfcHalfSpaceSolid",
        Some("IfcGeometricRepresentationItem"),
        &["BaseSurface", "AgreementFlag"],
    ),
    entity(
        "IfcPolygonalBoundedHalfSpace",
        Some("IfcHalfSpaceSolid"),
        &["Position", "PolygonalBoundary"],
    ),
    entity("IfcElementarySurface", Some("IfcGeometricRepresentationItem"), &["Position"]),
    entity("IfcPlane", Some("IfcElementarySurface"), &[]),
    entity("IfcTessellatedFaceSet", Some("IfcGeometricRepresentationItem"), &["Coordinates"]),
    entity(
        "IfcTriangulatedFaceSet",
        Some("IfcTessellatedFaceSet"),
        &["Normals", "Closed", "CoordIndex", "PnIndex"],
    ),
    entity(
        "IfcPolygonalFaceSet",
        Some("IfcTessellatedFaceSet"),
        &["Closed", "Faces", "PnIndex"],
    ),
    entity("IfcIndexedPolygonalFace", Some("IfcRepresentationItem"), &["CoordIndex"]),
    // Presentation
    entity("IfcStyledItem", Some("IfcRepresentationItem"), &["Item", "Styles", "Name"]),
    entity("IfcPresentationStyleAssignment", None, &["Styles"]),
    entity("IfcPresentationStyle", None, &["Name"]),
    entity("IfcSurfaceStyle", Some("IfcPresentationStyle"), &["Side", "Styles"]),
    entity("IfcSurfaceStyleShading", None, &["SurfaceColour", "Transparency"])
        .ifc2x3(&["SurfaceColour"]),
    entity(
        "IfcSurfaceStyleRendering",
        Some("IfcSurfaceStyleShading"),
        &[
            "DiffuseColour",
            "TransmissionColour",
            "DiffuseTransmissionColour",
            "ReflectionColour",
            "SpecularColour",
            "SpecularHighlight",
            "ReflectanceMethod",
        ],
    )
    .ifc2x3(&[
        "Transparency",
        "DiffuseColour",
        "TransmissionColour",
        "DiffuseTransmissionColour",
        "ReflectionColour",
        "SpecularColour",
        "SpecularHighlight",
        "ReflectanceMethod",
    ]),
    entity("IfcColourSpecification", None, &["Name"]),
    entity("IfcColourRgb", Some("IfcColourSpecification"), &["Red", "Green", "Blue"]),
];

/// Defined (wrapper) types that appear as typed values, e.g. `IFCLABEL('x')`
///
/// Union of the IFC2X3 and IFC4 defined types.
const DEFINED_TYPES: &[&str] = &[
    "IfcAbsorbedDoseMeasure",
    "IfcAccelerationMeasure",
    "IfcAmountOfSubstanceMeasure",
    "IfcAngularVelocityMeasure",
    "IfcAreaDensityMeasure",
    "IfcAreaMeasure",
    "IfcBinary",
    "IfcBoolean",
    "IfcBoxAlignment",
    "IfcCardinalPointReference",
    "IfcComplexNumber",
    "IfcCompoundPlaneAngleMeasure",
    "IfcContextDependentMeasure",
    "IfcCountMeasure",
    "IfcCurvatureMeasure",
    "IfcDate",
    "IfcDateTime",
    "IfcDayInMonthNumber",
    "IfcDayInWeekNumber",
    "IfcDaylightSavingHour",
    "IfcDescriptiveMeasure",
    "IfcDimensionCount",
    "IfcDoseEquivalentMeasure",
    "IfcDuration",
    "IfcDynamicViscosityMeasure",
    "IfcElectricCapacitanceMeasure",
    "IfcElectricChargeMeasure",
    "IfcElectricConductanceMeasure",
    "IfcElectricCurrentMeasure",
    "IfcElectricResistanceMeasure",
    "IfcElectricVoltageMeasure",
    "IfcEnergyMeasure",
    "IfcFontStyle",
    "IfcFontVariant",
    "IfcFontWeight",
    "IfcForceMeasure",
    "IfcFrequencyMeasure",
    "IfcGloballyUniqueId",
    "IfcHeatFluxDensityMeasure",
    "IfcHeatingValueMeasure",
    "IfcHourInDay",
    "IfcIdentifier",
    "IfcIlluminanceMeasure",
    "IfcInductanceMeasure",
    "IfcInteger",
    "IfcIntegerCountRateMeasure",
    "IfcIonConcentrationMeasure",
    "IfcIsothermalMoistureCapacityMeasure",
    "IfcKinematicViscosityMeasure",
    "IfcLabel",
    "IfcLanguageId",
    "IfcLengthMeasure",
    "IfcLinearForceMeasure",
    "IfcLinearMomentMeasure",
    "IfcLinearStiffnessMeasure",
    "IfcLinearVelocityMeasure",
    "IfcLogical",
    "IfcLuminousFluxMeasure",
    "IfcLuminousIntensityDistributionMeasure",
    "IfcLuminousIntensityMeasure",
    "IfcMagneticFluxDensityMeasure",
    "IfcMagneticFluxMeasure",
    "IfcMassDensityMeasure",
    "IfcMassFlowRateMeasure",
    "IfcMassMeasure",
    "IfcMassPerLengthMeasure",
    "IfcMinuteInHour",
    "IfcModulusOfElasticityMeasure",
    "IfcModulusOfLinearSubgradeReactionMeasure",
    "IfcModulusOfRotationalSubgradeReactionMeasure",
    "IfcModulusOfSubgradeReactionMeasure",
    "IfcMoistureDiffusivityMeasure",
    "IfcMolecularWeightMeasure",
    "IfcMomentOfInertiaMeasure",
    "IfcMonetaryMeasure",
    "IfcMonthInYearNumber",
    "IfcNonNegativeLengthMeasure",
    "IfcNormalisedRatioMeasure",
    "IfcNumericMeasure",
    "IfcPHMeasure",
    "IfcParameterValue",
    "IfcPlanarForceMeasure",
    "IfcPlaneAngleMeasure",
    "IfcPositiveInteger",
    "IfcPositiveLengthMeasure",
    "IfcPositivePlaneAngleMeasure",
    "IfcPositiveRatioMeasure",
    "IfcPowerMeasure",
    "IfcPresentableText",
    "IfcPressureMeasure",
    "IfcRadioActivityMeasure",
    "IfcRatioMeasure",
    "IfcReal",
    "IfcRotationalFrequencyMeasure",
    "IfcRotationalMassMeasure",
    "IfcRotationalStiffnessMeasure",
    "IfcSecondInMinute",
    "IfcSectionModulusMeasure",
    "IfcSectionalAreaIntegralMeasure",
    "IfcShearModulusMeasure",
    "IfcSolidAngleMeasure",
    "IfcSoundPowerLevelMeasure",
    "IfcSoundPowerMeasure",
    "IfcSoundPressureLevelMeasure",
    "IfcSoundPressureMeasure",
    "IfcSpecificHeatCapacityMeasure",
    "IfcSpecularExponent",
    "IfcSpecularRoughness",
    "IfcTemperatureGradientMeasure",
    "IfcTemperatureRateOfChangeMeasure",
    "IfcText",
    "IfcTextAlignment",
    "IfcTextDecoration",
    "IfcTextFontName",
    "IfcTextTransformation",
    "IfcThermalAdmittanceMeasure",
    "IfcThermalConductivityMeasure",
    "IfcThermalExpansionCoefficientMeasure",
    "IfcThermalResistanceMeasure",
    "IfcThermalTransmittanceMeasure",
    "IfcThermodynamicTemperatureMeasure",
    "IfcTime",
    "IfcTimeMeasure",
    "IfcTimeStamp",
    "IfcTorqueMeasure",
    "IfcURIReference",
    "IfcVaporPermeabilityMeasure",
    "IfcVolumeMeasure",
    "IfcVolumetricFlowRateMeasure",
    "IfcWarpingConstantMeasure",
    "IfcWarpingMomentMeasure",
    "IfcYearNumber",
];

struct ResolvedEntity {
    class_name: &'static str,
    attributes: Vec<&'static str>,
    /// The class itself followed by its supertypes
    ancestors: Vec<&'static str>,
}

/// Attribute tables for one schema release
pub struct Schema {
    version: SchemaVersion,
    entities: FxHashMap<String, ResolvedEntity>,
    defined_types: FxHashMap<String, &'static str>,
}

/// How one entity's positional attributes are named
#[derive(Clone, Debug)]
pub struct EntityLayout<'a> {
    /// Canonical class name, or the file keyword for unknown classes
    pub class_name: Cow<'a, str>,
    attributes: &'a [&'static str],
}

impl EntityLayout<'_> {
    /// Name of the attribute at `index`
    ///
    /// Positions past the known list are named `Attribute<n>` (1-based).
    pub fn attribute_name(&self, index: usize) -> Cow<'static, str> {
        match self.attributes.get(index) {
            Some(name) => Cow::Borrowed(*name),
            None => Cow::Owned(format!("Attribute{}", index + 1)),
        }
    }

    /// Known attribute names in declaration order
    pub fn attributes(&self) -> &[&'static str] {
        self.attributes
    }
}

impl Schema {
    fn build(version: SchemaVersion) -> Self {
        let defs: FxHashMap<&'static str, &EntityDef> =
            ENTITIES.iter().map(|def| (def.name, def)).collect();

        let mut entities = FxHashMap::default();
        for def in ENTITIES {
            let mut chain = Vec::new();
            let mut current = Some(def);
            while let Some(d) = current {
                chain.push(d);
                current = d.supertype.and_then(|s| defs.get(s).copied());
            }

            let mut attributes = Vec::new();
            for d in chain.iter().rev() {
                let own = match (version, d.ifc2x3) {
                    (SchemaVersion::Ifc2x3, Some(legacy)) => legacy,
                    _ => d.attributes,
                };
                attributes.extend_from_slice(own);
            }

            entities.insert(
                def.name.to_ascii_uppercase(),
                ResolvedEntity {
                    class_name: def.name,
                    attributes,
                    ancestors: chain.iter().map(|d| d.name).collect(),
                },
            );
        }

        let defined_types = DEFINED_TYPES
            .iter()
            .map(|name| (name.to_ascii_uppercase(), *name))
            .collect();

        Self {
            version,
            entities,
            defined_types,
        }
    }

    /// Shared tables for a schema release
    pub fn for_version(version: SchemaVersion) -> &'static Schema {
        static IFC2X3: OnceLock<Schema> = OnceLock::new();
        static IFC4: OnceLock<Schema> = OnceLock::new();
        match version {
            SchemaVersion::Ifc2x3 => IFC2X3.get_or_init(|| Schema::build(SchemaVersion::Ifc2x3)),
            SchemaVersion::Ifc4 | SchemaVersion::Ifc4x3 => {
                IFC4.get_or_init(|| Schema::build(SchemaVersion::Ifc4))
            }
        }
    }

    /// Release these tables describe
    pub fn version(&self) -> SchemaVersion {
        self.version
    }

    fn resolve(&self, keyword: &str) -> Option<&ResolvedEntity> {
        self.entities.get(&keyword.to_ascii_uppercase())
    }

    /// Canonical class name for an entity or defined-type keyword
    ///
    /// Unknown keywords are returned unchanged.
    pub fn class_name<'a>(&self, keyword: &'a str) -> Cow<'a, str> {
        if let Some(resolved) = self.resolve(keyword) {
            return Cow::Borrowed(resolved.class_name);
        }
        match self.defined_types.get(&keyword.to_ascii_uppercase()) {
            Some(name) => Cow::Borrowed(*name),
            None => Cow::Borrowed(keyword),
        }
    }

    /// Whether `keyword` names `class_name` or one of its subtypes
    pub fn is_subtype_of(&self, keyword: &str, class_name: &str) -> bool {
        self.resolve(keyword)
            .map(|resolved| resolved.ancestors.iter().any(|name| *name == class_name))
            .unwrap_or(false)
    }

    /// Attribute naming for a decoded entity, from the tables alone
    pub fn layout<'a>(&'a self, entity: &'a DecodedEntity) -> EntityLayout<'a> {
        if let Some(resolved) = self.resolve(&entity.type_name) {
            return EntityLayout {
                class_name: Cow::Borrowed(resolved.class_name),
                attributes: &resolved.attributes,
            };
        }

        // Unknown rooted classes still start with a compressed GlobalId
        let rooted = entity
            .get_string(0)
            .map(guid::is_compressed)
            .unwrap_or(false);

        EntityLayout {
            class_name: Cow::Borrowed(entity.type_name.as_str()),
            attributes: if rooted { ROOT_ATTRIBUTES } else { &[] },
        }
    }

    /// Attribute naming for a decoded entity within its model
    ///
    /// An unknown rooted class whose sixth attribute points at an object
    /// placement, or whose seventh points at a product representation, is
    /// named as an `IfcProduct` so placement and geometry handling apply.
    pub fn layout_in<'a>(
        &'a self,
        entity: &'a DecodedEntity,
        resolver: &dyn EntityResolver,
    ) -> EntityLayout<'a> {
        let layout = self.layout(entity);
        if self.resolve(&entity.type_name).is_some()
            || layout.attributes() != ROOT_ATTRIBUTES
            || entity.attributes.len() < PRODUCT_ATTRIBUTES.len()
        {
            return layout;
        }

        let points_at = |index: usize, class_name: &str| {
            entity
                .get(index)
                .and_then(|value| resolver.resolve_ref(value))
                .map(|target| self.is_subtype_of(&target.type_name, class_name))
                .unwrap_or(false)
        };

        if points_at(5, "IfcObjectPlacement") || points_at(6, "IfcProductRepresentation") {
            EntityLayout {
                attributes: PRODUCT_ATTRIBUTES,
                ..layout
            }
        } else {
            layout
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AttributeValue, EntityId};

    fn decoded(type_name: &str, attributes: Vec<AttributeValue>) -> DecodedEntity {
        DecodedEntity {
            id: EntityId(1),
            type_name: type_name.to_string(),
            attributes,
        }
    }

    #[test]
    fn test_schema_version_from_identifier() {
        assert_eq!(SchemaVersion::from_identifier("IFC2X3"), SchemaVersion::Ifc2x3);
        assert_eq!(SchemaVersion::from_identifier("IFC4"), SchemaVersion::Ifc4);
        assert_eq!(SchemaVersion::from_identifier("IFC4X3_ADD2"), SchemaVersion::Ifc4x3);
        assert_eq!(SchemaVersion::from_identifier(""), SchemaVersion::Ifc4);
    }

    #[test]
    fn test_ifc4x3_shares_ifc4_tables() {
        let schema = Schema::for_version(SchemaVersion::Ifc4x3);
        assert_eq!(schema.version(), SchemaVersion::Ifc4);
        assert!(std::ptr::eq(schema, Schema::for_version(SchemaVersion::Ifc4)));
    }

    #[test]
    fn test_inherited_attribute_order() {
        let schema = Schema::for_version(SchemaVersion::Ifc4);
        let wall = decoded("IFCWALL", Vec::new());
        let layout = schema.layout(&wall);

        assert_eq!(layout.class_name, "IfcWall");
        assert_eq!(
            layout.attributes(),
            &[
                "GlobalId",
                "OwnerHistory",
                "Name",
                "Description",
                "ObjectType",
                "ObjectPlacement",
                "Representation",
                "Tag",
                "PredefinedType",
            ]
        );
    }

    #[test]
    fn test_ifc2x3_overrides() {
        let schema = Schema::for_version(SchemaVersion::Ifc2x3);
        let wall = decoded("IFCWALLSTANDARDCASE", Vec::new());
        assert_eq!(schema.layout(&wall).attributes().len(), 8);

        let space = decoded("IFCSPACE", Vec::new());
        let layout = schema.layout(&space);
        assert_eq!(layout.attribute_name(9), "InteriorOrExteriorSpace");
    }

    #[test]
    fn test_geometric_subcontext_inherits_context() {
        let schema = Schema::for_version(SchemaVersion::Ifc4);
        let sub = decoded("IFCGEOMETRICREPRESENTATIONSUBCONTEXT", Vec::new());
        let layout = schema.layout(&sub);
        assert_eq!(layout.attributes().len(), 10);
        assert_eq!(layout.attribute_name(6), "ParentContext");
    }

    #[test]
    fn test_unknown_class_positional_names() {
        let schema = Schema::for_version(SchemaVersion::Ifc4);
        let unknown = decoded(
            "IFCFANCYTHING",
            vec![AttributeValue::Float(1.0), AttributeValue::Float(2.0)],
        );
        let layout = schema.layout(&unknown);
        assert_eq!(layout.class_name, "IFCFANCYTHING");
        assert_eq!(layout.attribute_name(0), "Attribute1");
        assert_eq!(layout.attribute_name(1), "Attribute2");
    }

    #[test]
    fn test_unknown_rooted_class() {
        let schema = Schema::for_version(SchemaVersion::Ifc4);
        let unknown = decoded(
            "IFCFANCYELEMENT",
            vec![
                AttributeValue::String("2XQ$n5SLP5MBLyL442paFx".to_string()),
                AttributeValue::Null,
                AttributeValue::String("Thing".to_string()),
                AttributeValue::Null,
                AttributeValue::Integer(7),
            ],
        );
        let layout = schema.layout(&unknown);
        assert_eq!(layout.attribute_name(0), "GlobalId");
        assert_eq!(layout.attribute_name(2), "Name");
        assert_eq!(layout.attribute_name(4), "Attribute5");
    }

    #[test]
    fn test_defined_type_names() {
        let schema = Schema::for_version(SchemaVersion::Ifc4);
        assert_eq!(schema.class_name("IFCLABEL"), "IfcLabel");
        assert_eq!(schema.class_name("IFCPOSITIVELENGTHMEASURE"), "IfcPositiveLengthMeasure");
        assert_eq!(schema.class_name("IFCPRESSUREMEASURE"), "IfcPressureMeasure");
        assert_eq!(schema.class_name("IFCURIREFERENCE"), "IfcURIReference");
        assert_eq!(schema.class_name("IFCPHMEASURE"), "IfcPHMeasure");
        assert_eq!(schema.class_name("IFCOWNERHISTORY"), "IfcOwnerHistory");
        assert_eq!(schema.class_name("IFCMYSTERY"), "IFCMYSTERY");
    }

    #[test]
    fn test_mep_occurrences_are_products() {
        let schema = Schema::for_version(SchemaVersion::Ifc4);
        for keyword in ["IFCPUMP", "IFCAIRTERMINAL", "IFCCABLECARRIERSEGMENT", "IFCSENSOR"] {
            let entity = decoded(keyword, Vec::new());
            let layout = schema.layout(&entity);
            assert_eq!(&layout.attributes()[..7], PRODUCT_ATTRIBUTES, "{keyword}");
            assert_eq!(layout.attribute_name(8), "PredefinedType", "{keyword}");
        }
        assert!(schema.is_subtype_of("IFCVALVE", "IfcFlowController"));
        assert!(schema.is_subtype_of("IfcGridPlacement", "IfcObjectPlacement"));
        assert!(!schema.is_subtype_of("IFCVALVE", "IfcSpatialElement"));
        assert!(!schema.is_subtype_of("IFCMYSTERY", "IfcProduct"));
    }

    #[test]
    fn test_ifc2x3_control_element_id() {
        let schema = Schema::for_version(SchemaVersion::Ifc2x3);
        let control = decoded("IFCDISTRIBUTIONCONTROLELEMENT", Vec::new());
        assert_eq!(schema.layout(&control).attribute_name(8), "ControlElementId");

        let transport = decoded("IFCTRANSPORTELEMENT", Vec::new());
        assert_eq!(schema.layout(&transport).attribute_name(8), "OperationType");
    }

    #[test]
    fn test_spatial_element_order_unchanged() {
        let schema = Schema::for_version(SchemaVersion::Ifc2x3);
        let storey = decoded("IFCBUILDINGSTOREY", Vec::new());
        let layout = schema.layout(&storey);
        assert_eq!(layout.attribute_name(7), "LongName");
        assert_eq!(layout.attribute_name(8), "CompositionType");
        assert_eq!(layout.attribute_name(9), "Elevation");
    }

    struct MapResolver(FxHashMap<EntityId, std::sync::Arc<DecodedEntity>>);

    impl EntityResolver for MapResolver {
        fn get(&self, id: EntityId) -> Option<std::sync::Arc<DecodedEntity>> {
            self.0.get(&id).cloned()
        }

        fn entity_ids(&self) -> Vec<EntityId> {
            self.0.keys().copied().collect()
        }
    }

    fn resolver(entities: Vec<(u32, &str)>) -> MapResolver {
        MapResolver(
            entities
                .into_iter()
                .map(|(id, type_name)| {
                    let entity = DecodedEntity {
                        id: EntityId(id),
                        type_name: type_name.to_string(),
                        attributes: Vec::new(),
                    };
                    (EntityId(id), std::sync::Arc::new(entity))
                })
                .collect(),
        )
    }

    fn rooted(type_name: &str, placement: u32, shape: u32) -> DecodedEntity {
        decoded(
            type_name,
            vec![
                AttributeValue::String("2XQ$n5SLP5MBLyL442paFx".to_string()),
                AttributeValue::Null,
                AttributeValue::String("Thing".to_string()),
                AttributeValue::Null,
                AttributeValue::Null,
                AttributeValue::EntityRef(EntityId(placement)),
                AttributeValue::EntityRef(EntityId(shape)),
            ],
        )
    }

    #[test]
    fn test_layout_in_names_unknown_products() {
        let schema = Schema::for_version(SchemaVersion::Ifc4);
        let refs = resolver(vec![
            (10, "IFCLOCALPLACEMENT"),
            (11, "IFCPRODUCTDEFINITIONSHAPE"),
            (12, "IFCCARTESIANPOINT"),
        ]);

        let both = rooted("IFCNEWDEVICE", 10, 11);
        assert_eq!(schema.layout_in(&both, &refs).attributes(), PRODUCT_ATTRIBUTES);

        let shape_only = rooted("IFCNEWDEVICE", 12, 11);
        assert_eq!(
            schema.layout_in(&shape_only, &refs).attribute_name(6),
            "Representation"
        );

        let neither = rooted("IFCNEWDEVICE", 12, 12);
        assert_eq!(schema.layout_in(&neither, &refs).attributes(), ROOT_ATTRIBUTES);

        // Known classes keep their table layout
        let proxy = rooted("IFCPROXY", 10, 11);
        assert_eq!(schema.layout_in(&proxy, &refs).attribute_name(7), "ProxyType");
    }
}
