use crate::format::FormatterKind::{self, Boolean, Currency, Date, Datetime, Uppercase};
use crate::format::UnitKind::{self, Bhp, Cc, Days, Db, GPerKm, Kg, Kph, Kw, LPer100Km, LbFt, Litres, Miles, Mm, Mpg, Mph, Nm, Ps, Rpm, Seconds};

/// A built-in registry entry.
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    pub path: &'static str,
    pub label: Option<&'static str>,
    pub unit: Option<UnitKind>,
    pub formatter: Option<FormatterKind>,
    pub hidden: bool,
}

impl FieldDef {
    #[must_use]
    pub const fn new(path: &'static str) -> Self {
        Self {
            path,
            label: None,
            unit: None,
            formatter: None,
            hidden: false,
        }
    }

    #[must_use]
    pub const fn label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    #[must_use]
    pub const fn unit(mut self, unit: UnitKind) -> Self {
        self.unit = Some(unit);
        self
    }

    #[must_use]
    pub const fn formatter(mut self, formatter: FormatterKind) -> Self {
        self.formatter = Some(formatter);
        self
    }

    #[must_use]
    pub const fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}

const fn field(path: &'static str) -> FieldDef {
    FieldDef::new(path)
}

/// Metadata names the provider attaches under many different parents. A field whose final path segment
/// is one of these is never shown.
pub const HIDDEN_FIELD_NAMES: &[&str] = &[
    "PackageName",
    "ResponseId",
    "StatusCode",
    "StatusMessage",
    "DocumentVersion",
    "GeneratedAt",
    "UkvdId",
    "UpdateTimeStamp",
    "RequestInformation",
    "ResponseInformation",
    "SubscriptionOptionList",
    "Software",
    "AdditionalInformation",
    "DocumentVersionDescription",
];

pub const FIELD_DEFINITIONS: &[FieldDef] = &[
    // Identification
    field("VehicleDetails.VehicleIdentification.Vrm").label("Registration").formatter(Uppercase),
    field("VehicleDetails.VehicleIdentification.Vin").label("VIN").formatter(Uppercase),
    field("VehicleDetails.VehicleIdentification.VinLast5").hidden(),
    field("VehicleDetails.VehicleIdentification.EngineNumber").label("Engine Number").formatter(Uppercase),
    field("VehicleDetails.VehicleIdentification.DvlaMake").label("Make"),
    field("VehicleDetails.VehicleIdentification.DvlaModel").label("Model"),
    field("VehicleDetails.VehicleIdentification.DvlaBodyType").label("Body Type"),
    field("VehicleDetails.VehicleIdentification.DvlaFuelType").label("Fuel Type"),
    field("VehicleDetails.VehicleIdentification.DvlaWheelPlan").label("Wheel Plan"),
    field("VehicleDetails.VehicleIdentification.YearOfManufacture").label("Year of Manufacture"),
    field("VehicleDetails.VehicleIdentification.DateOfManufacture").label("Date of Manufacture").formatter(Date),
    field("VehicleDetails.VehicleIdentification.DateFirstRegistered").label("First Registered").formatter(Date),
    field("VehicleDetails.VehicleIdentification.DateFirstRegisteredInUk").label("First Registered in UK").formatter(Date),
    // Status
    field("VehicleDetails.VehicleStatus.IsImported").label("Imported").formatter(Boolean),
    field("VehicleDetails.VehicleStatus.IsImportedFromNi").label("Imported from Northern Ireland").formatter(Boolean),
    field("VehicleDetails.VehicleStatus.IsImportedFromOutsideEu").label("Imported from Outside EU").formatter(Boolean),
    field("VehicleDetails.VehicleStatus.DateImported").label("Date Imported").formatter(Date),
    field("VehicleDetails.VehicleStatus.IsExported").label("Exported").formatter(Boolean),
    field("VehicleDetails.VehicleStatus.DateExported").label("Date Exported").formatter(Date),
    field("VehicleDetails.VehicleStatus.IsScrapped").label("Scrapped").formatter(Boolean),
    field("VehicleDetails.VehicleStatus.IsUnscrapped").label("Unscrapped").formatter(Boolean),
    field("VehicleDetails.VehicleStatus.DateScrapped").label("Date Scrapped").formatter(Date),
    field("VehicleDetails.VehicleStatus.CertificateOfDestructionIssued").label("Certificate of Destruction").formatter(Boolean),
    field("VehicleDetails.VehicleStatus.VehicleExciseDutyDetails.DvlaCo2").label("CO2 (DVLA)").unit(GPerKm),
    field("VehicleDetails.VehicleStatus.VehicleExciseDutyDetails.DvlaCo2Band").label("CO2 Band (DVLA)"),
    field("VehicleDetails.VehicleStatus.VehicleExciseDutyDetails.DvlaBand").hidden(),
    // History
    field("VehicleDetails.VehicleHistory.ColourDetails.CurrentColour").label("Colour"),
    field("VehicleDetails.VehicleHistory.ColourDetails.OriginalColour").label("Original Colour"),
    field("VehicleDetails.VehicleHistory.ColourDetails.NumberOfColourChanges").label("Colour Changes"),
    field("VehicleDetails.VehicleHistory.ColourDetails.LatestColourChangeDate").label("Last Colour Change").formatter(Date),
    field("VehicleDetails.VehicleHistory.KeeperChangeList.NumberOfPreviousKeepers").label("Previous Keepers"),
    field("VehicleDetails.VehicleHistory.KeeperChangeList.DateOfTransaction").label("Date of Change").formatter(Date),
    field("VehicleDetails.VehicleHistory.KeeperChangeList.DateOfLastKeeperChange").label("Previous Change").formatter(Date),
    field("VehicleDetails.VehicleHistory.PlateChangeList.PreviousVrm").label("Previous Registration").formatter(Uppercase),
    field("VehicleDetails.VehicleHistory.PlateChangeList.CurrentVrm").label("New Registration").formatter(Uppercase),
    field("VehicleDetails.VehicleHistory.PlateChangeList.DateChanged").label("Date Changed").formatter(Date),
    field("VehicleDetails.VehicleHistory.V5cCertificateList.CertificateDate").label("V5C Issued").formatter(Date),
    // DVLA technical
    field("VehicleDetails.DvlaTechnicalDetails.EngineCapacityCc").label("Engine Capacity").unit(Cc),
    field("VehicleDetails.DvlaTechnicalDetails.NumberOfSeats").label("Seats"),
    field("VehicleDetails.DvlaTechnicalDetails.MaxNetPowerKw").label("Max Net Power").unit(Kw),
    field("VehicleDetails.DvlaTechnicalDetails.GrossWeightKg").label("Gross Weight").unit(Kg),
    field("VehicleDetails.DvlaTechnicalDetails.MassInServiceKg").label("Mass in Service").unit(Kg),
    // Model identification
    field("ModelDetails.ModelIdentification.Make").label("Make"),
    field("ModelDetails.ModelIdentification.Range").label("Range"),
    field("ModelDetails.ModelIdentification.Model").label("Model"),
    field("ModelDetails.ModelIdentification.ModelVariant").label("Variant"),
    field("ModelDetails.ModelIdentification.Series").label("Series"),
    field("ModelDetails.ModelIdentification.Mark").label("Mark"),
    field("ModelDetails.ModelIdentification.StartDate").label("Model Introduced").formatter(Date),
    field("ModelDetails.ModelIdentification.EndDate").label("Model Discontinued").formatter(Date),
    field("ModelDetails.ModelIdentification.CountryOfOrigin").label("Country of Origin"),
    field("ModelDetails.ModelIdentification.ManufacturerModelCode").hidden(),
    field("ModelDetails.ModelClassification.TypeApprovalCategory").label("Type Approval Category"),
    field("ModelDetails.ModelClassification.MarketSectorCode").label("Market Sector"),
    field("ModelDetails.ModelClassification.VehicleClass").label("Vehicle Class"),
    field("ModelDetails.ModelClassification.TaxationClass").label("Taxation Class"),
    // Body and dimensions
    field("ModelDetails.BodyDetails.BodyStyle").label("Body Style"),
    field("ModelDetails.BodyDetails.CabType").label("Cab Type"),
    field("ModelDetails.BodyDetails.NumberOfAxles").label("Axles"),
    field("ModelDetails.BodyDetails.NumberOfDoors").label("Doors"),
    field("ModelDetails.BodyDetails.NumberOfSeats").label("Seats"),
    field("ModelDetails.BodyDetails.FuelTankCapacityLitres").label("Fuel Tank Capacity").unit(Litres),
    field("ModelDetails.Dimensions.HeightMm").label("Height").unit(Mm),
    field("ModelDetails.Dimensions.LengthMm").label("Length").unit(Mm),
    field("ModelDetails.Dimensions.WidthMm").label("Width").unit(Mm),
    field("ModelDetails.Dimensions.WheelbaseLengthMm").label("Wheelbase").unit(Mm),
    field("ModelDetails.Dimensions.InternalLoadLengthMm").label("Internal Load Length").unit(Mm),
    field("ModelDetails.Weights.KerbWeightKg").label("Kerb Weight").unit(Kg),
    field("ModelDetails.Weights.GrossVehicleWeightKg").label("Gross Vehicle Weight").unit(Kg),
    field("ModelDetails.Weights.GrossTrainWeightKg").label("Gross Train Weight").unit(Kg),
    field("ModelDetails.Weights.PayloadWeightKg").label("Payload").unit(Kg),
    field("ModelDetails.Weights.UnladenWeightKg").label("Unladen Weight").unit(Kg),
    // Powertrain
    field("ModelDetails.Powertrain.PowertrainType").label("Powertrain"),
    field("ModelDetails.Powertrain.FuelType").label("Fuel Type"),
    field("ModelDetails.Powertrain.IceDetails.EngineCapacityCc").label("Engine Capacity").unit(Cc),
    field("ModelDetails.Powertrain.IceDetails.EngineCapacityLitres").label("Engine Size").unit(Litres),
    field("ModelDetails.Powertrain.IceDetails.NumberOfCylinders").label("Cylinders"),
    field("ModelDetails.Powertrain.IceDetails.CylinderArrangement").label("Cylinder Arrangement"),
    field("ModelDetails.Powertrain.IceDetails.EngineDescription").label("Engine"),
    field("ModelDetails.Powertrain.IceDetails.FuelDelivery").label("Fuel Delivery"),
    field("ModelDetails.Powertrain.IceDetails.Aspiration").label("Aspiration"),
    field("ModelDetails.Powertrain.Transmission.TransmissionType").label("Transmission"),
    field("ModelDetails.Powertrain.Transmission.NumberOfGears").label("Gears"),
    field("ModelDetails.Powertrain.Transmission.DriveType").label("Drive Type"),
    field("ModelDetails.Powertrain.Transmission.DrivingAxle").label("Driving Axle"),
    field("ModelDetails.Powertrain.EvDetails.BatteryCapacityKwh").label("Battery Capacity (kWh)"),
    field("ModelDetails.Powertrain.EvDetails.RealRangeMiles").label("Real-World Range").unit(Miles),
    field("ModelDetails.Powertrain.EvDetails.ChargeTimeDays").hidden(),
    // Performance
    field("ModelDetails.Performance.Torque.Nm").label("Torque").unit(Nm),
    field("ModelDetails.Performance.Torque.LbFt").label("Torque").unit(LbFt),
    field("ModelDetails.Performance.Torque.Rpm").label("Peak Torque RPM").unit(Rpm),
    field("ModelDetails.Performance.Power.Bhp").label("Power").unit(Bhp),
    field("ModelDetails.Performance.Power.Ps").label("Power").unit(Ps),
    field("ModelDetails.Performance.Power.Kw").label("Power").unit(Kw),
    field("ModelDetails.Performance.Power.Rpm").label("Peak Power RPM").unit(Rpm),
    field("ModelDetails.Performance.Statistics.ZeroToSixtyMph").label("0-60 mph").unit(Seconds),
    field("ModelDetails.Performance.Statistics.ZeroToOneHundredKph").label("0-100 km/h").unit(Seconds),
    field("ModelDetails.Performance.Statistics.MaxSpeedMph").label("Top Speed").unit(Mph),
    field("ModelDetails.Performance.Statistics.MaxSpeedKph").label("Top Speed").unit(Kph),
    field("ModelDetails.Performance.FuelEconomy.UrbanColdMpg").label("Urban Economy").unit(Mpg),
    field("ModelDetails.Performance.FuelEconomy.ExtraUrbanMpg").label("Extra-Urban Economy").unit(Mpg),
    field("ModelDetails.Performance.FuelEconomy.CombinedMpg").label("Combined Economy").unit(Mpg),
    field("ModelDetails.Performance.FuelEconomy.UrbanColdL100Km").label("Urban Consumption").unit(LPer100Km),
    field("ModelDetails.Performance.FuelEconomy.ExtraUrbanL100Km").label("Extra-Urban Consumption").unit(LPer100Km),
    field("ModelDetails.Performance.FuelEconomy.CombinedL100Km").label("Combined Consumption").unit(LPer100Km),
    // Emissions and sound
    field("ModelDetails.Emissions.ManufacturerCo2").label("CO2 (Manufacturer)").unit(GPerKm),
    field("ModelDetails.Emissions.EuroStatus").label("Euro Status"),
    field("ModelDetails.Emissions.RealDrivingEmissions").label("RDE Compliant").formatter(Boolean),
    field("ModelDetails.Sound.StationaryDb").label("Stationary Noise").unit(Db),
    field("ModelDetails.Sound.EngineSpeedForStationaryRpm").label("Stationary Test Speed").unit(Rpm),
    field("ModelDetails.Sound.DriveByDb").label("Drive-By Noise").unit(Db),
    // Tax
    field("VehicleTaxDetails.Co2Emissions").label("CO2 Emissions").unit(GPerKm),
    field("VehicleTaxDetails.VedBand").label("VED Band"),
    field("VehicleTaxDetails.TaxStatus").label("Tax Status"),
    field("VehicleTaxDetails.TaxDueDate").label("Tax Due").formatter(Date),
    field("VehicleTaxDetails.DaysUntilTaxDue").label("Days Until Tax Due").unit(Days),
    field("VehicleTaxDetails.VedRate.FirstYear").label("First Year VED").formatter(Currency),
    field("VehicleTaxDetails.VedRate.Standard.SixMonths").label("6-Month VED").formatter(Currency),
    field("VehicleTaxDetails.VedRate.Standard.TwelveMonths").label("12-Month VED").formatter(Currency),
    field("VehicleTaxDetails.VedRate.PremiumVehicle.YearTwoToSix.TwelveMonths").label("Premium Vehicle VED").formatter(Currency),
    // MOT
    field("MotHistory.MotDueDate").label("MOT Due").formatter(Date),
    field("MotHistory.DaysUntilNextMotIsDue").label("Days Until MOT Due").unit(Days),
    field("MotHistory.RecordList.TestDate").label("Test Date").formatter(Date),
    field("MotHistory.RecordList.ExpiryDate").label("Expiry Date").formatter(Date),
    field("MotHistory.RecordList.TestResult").label("Result"),
    field("MotHistory.RecordList.OdometerReading").label("Mileage").unit(Miles),
    field("MotHistory.RecordList.OdometerInKilometers").hidden(),
    field("MotHistory.RecordList.TestNumber").label("Test Number"),
    field("MotHistory.RecordList.IsRetest").label("Retest").formatter(Boolean),
    // Valuation
    field("ValuationDetails.ValuationTime").label("Valued At").formatter(Datetime),
    field("ValuationDetails.Mileage").label("Valuation Mileage").unit(Miles),
    field("ValuationDetails.ValuationBook").hidden(),
    field("ValuationDetails.ValuationFigures.OnTheRoad").label("On the Road Price").formatter(Currency),
    field("ValuationDetails.ValuationFigures.DealerForecourt").label("Dealer Forecourt").formatter(Currency),
    field("ValuationDetails.ValuationFigures.TradeRetail").label("Trade Retail").formatter(Currency),
    field("ValuationDetails.ValuationFigures.PrivateClean").label("Private Clean").formatter(Currency),
    field("ValuationDetails.ValuationFigures.PrivateAverage").label("Private Average").formatter(Currency),
    field("ValuationDetails.ValuationFigures.PartExchange").label("Part Exchange").formatter(Currency),
    field("ValuationDetails.ValuationFigures.Auction").label("Auction").formatter(Currency),
    field("ValuationDetails.ValuationFigures.TradeAverage").label("Trade Average").formatter(Currency),
    field("ValuationDetails.ValuationFigures.TradePoor").label("Trade Poor").formatter(Currency),
    // Mileage
    field("MileageCheckDetails.MileageAnomalyDetected").label("Mileage Anomaly").formatter(Boolean),
    field("MileageCheckDetails.HighestRecordedMileage").label("Highest Recorded Mileage").unit(Miles),
    field("MileageCheckDetails.AverageMileage").label("Average Annual Mileage").unit(Miles),
    field("MileageCheckDetails.MileageResultList.DateOfInformation").label("Date Recorded").formatter(Date),
    field("MileageCheckDetails.MileageResultList.Mileage").label("Mileage").unit(Miles),
    field("MileageCheckDetails.MileageResultList.SourceOfInformation").label("Source"),
    // Finance, theft, write-off
    field("FinanceDetails.FinanceRecordCount").label("Outstanding Finance Agreements"),
    field("FinanceDetails.FinanceRecordList.AgreementDate").label("Agreement Date").formatter(Date),
    field("FinanceDetails.FinanceRecordList.AgreementType").label("Agreement Type"),
    field("FinanceDetails.FinanceRecordList.FinanceCompany").label("Finance Company"),
    field("FinanceDetails.FinanceRecordList.AgreementTerm").label("Term (Months)"),
    field("FinanceDetails.FinanceRecordList.ContactNumber").label("Contact Number"),
    field("FinanceDetails.FinanceRecordList.AgreementNumber").hidden(),
    field("PoliceStolenDetails.IsStolen").label("Reported Stolen").formatter(Boolean),
    field("PoliceStolenDetails.DateReportedStolen").label("Date Reported Stolen").formatter(Date),
    field("PoliceStolenDetails.PoliceForce").label("Police Force"),
    field("InsuranceWriteOffDetails.WriteOffRecordCount").label("Write-Off Records"),
    field("InsuranceWriteOffDetails.WriteOffRecordList.LossDate").label("Loss Date").formatter(Date),
    field("InsuranceWriteOffDetails.WriteOffRecordList.Category").label("Category").formatter(Uppercase),
    field("InsuranceWriteOffDetails.WriteOffRecordList.RemovedDate").label("Date Removed").formatter(Date),
    field("InsuranceWriteOffDetails.WriteOffRecordList.IsPayoutMade").label("Payout Made").formatter(Boolean),
    // Recalls
    field("Recalls.RecallNumber").label("Recall Number").formatter(Uppercase),
    field("Recalls.LaunchDate").label("Launch Date").formatter(Date),
    field("Recalls.Concern").label("Concern"),
    field("Recalls.Remedy").label("Remedy"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_paths_are_unique() {
        let mut seen = HashSet::new();
        for def in FIELD_DEFINITIONS {
            assert!(seen.insert(def.path), "duplicate field definition for '{}'", def.path);
        }
    }

    #[test]
    fn test_paths_are_canonical() {
        for def in FIELD_DEFINITIONS {
            assert!(!def.path.contains('['), "field '{}' should not carry an index", def.path);
            assert!(!def.path.is_empty());
            assert!(!def.path.split('.').any(str::is_empty), "field '{}' has an empty segment", def.path);
        }
    }

    #[test]
    fn test_hidden_entries_carry_no_formatting() {
        for def in FIELD_DEFINITIONS.iter().filter(|def| def.hidden) {
            assert!(def.label.is_none() && def.unit.is_none() && def.formatter.is_none(), "{}", def.path);
        }
    }

    #[test]
    fn test_hidden_names_are_unique() {
        let names: HashSet<_> = HIDDEN_FIELD_NAMES.iter().collect();
        assert_eq!(names.len(), HIDDEN_FIELD_NAMES.len());
    }
}
